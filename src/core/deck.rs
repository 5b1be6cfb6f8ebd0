use std::collections::VecDeque;

use crate::models::{SwipeCard, SwipeDecision};

/// Horizontal drag in pixels past which a release counts as a swipe
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Card removed from the deck together with the choice made on it
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeOutcome {
    pub card: SwipeCard,
    pub decision: SwipeDecision,
}

/// Ordered stack of cards; the front card is the one on display
#[derive(Debug, Clone, Default)]
pub struct SwipeDeck {
    cards: VecDeque<SwipeCard>,
}

impl SwipeDeck {
    pub fn new(cards: impl IntoIterator<Item = SwipeCard>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn current(&self) -> Option<&SwipeCard> {
        self.cards.front()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Pop the front card. Deciding on an empty deck does nothing.
    pub fn decide(&mut self, decision: SwipeDecision) -> Option<SwipeOutcome> {
        let card = self.cards.pop_front()?;
        tracing::debug!(
            "Swiped {:?} on {} ({} left)",
            decision,
            card.address,
            self.cards.len()
        );
        Some(SwipeOutcome { card, decision })
    }
}

/// Touch drag on the front card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    threshold_px: f64,
    origin: (f64, f64),
    offset: (f64, f64),
    dragging: bool,
}

impl DragGesture {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            origin: (0.0, 0.0),
            offset: (0.0, 0.0),
            dragging: false,
        }
    }

    pub fn start(&mut self, x: f64, y: f64) {
        self.origin = (x, y);
        self.dragging = true;
    }

    /// Track a move; ignored unless a drag is in progress
    pub fn update(&mut self, x: f64, y: f64) {
        if !self.dragging {
            return;
        }
        self.offset = (x - self.origin.0, y - self.origin.1);
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Tilt of the dragged card in degrees
    pub fn rotation_deg(&self) -> f64 {
        self.offset.0 * 0.1
    }

    /// Finish the drag, returning the decision when it cleared the threshold.
    /// The offset resets either way.
    pub fn release(&mut self) -> Option<SwipeDecision> {
        let dx = self.offset.0;
        self.offset = (0.0, 0.0);
        self.dragging = false;

        if dx.abs() > self.threshold_px {
            Some(SwipeDecision::from_accept(dx > 0.0))
        } else {
            None
        }
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}
