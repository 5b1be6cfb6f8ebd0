use crate::core::deck::{DragGesture, SwipeDeck, SwipeOutcome};
use crate::models::{SwipeCard, SwipeDecision};

/// Swipe deck on the home route
///
/// The alternate home route shows the same deck but only takes button input,
/// so it is built without a drag gesture.
#[derive(Debug, Clone)]
pub struct HomeView {
    deck: SwipeDeck,
    gesture: Option<DragGesture>,
}

impl HomeView {
    pub fn with_gestures(cards: Vec<SwipeCard>, swipe_threshold_px: f64) -> Self {
        Self {
            deck: SwipeDeck::new(cards),
            gesture: Some(DragGesture::new(swipe_threshold_px)),
        }
    }

    pub fn buttons_only(cards: Vec<SwipeCard>) -> Self {
        Self {
            deck: SwipeDeck::new(cards),
            gesture: None,
        }
    }

    pub fn deck(&self) -> &SwipeDeck {
        &self.deck
    }

    pub fn current(&self) -> Option<&SwipeCard> {
        self.deck.current()
    }

    /// "Interested" / "Not Interested" buttons
    pub fn decide(&mut self, accept: bool) -> Option<SwipeOutcome> {
        self.deck.decide(SwipeDecision::from_accept(accept))
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        if let Some(gesture) = &mut self.gesture {
            gesture.start(x, y);
        }
    }

    pub fn touch_move(&mut self, x: f64, y: f64) {
        if let Some(gesture) = &mut self.gesture {
            gesture.update(x, y);
        }
    }

    pub fn touch_end(&mut self) -> Option<SwipeOutcome> {
        let decision = self.gesture.as_mut()?.release()?;
        self.deck.decide(decision)
    }

    pub fn drag_offset(&self) -> (f64, f64) {
        self.gesture.map_or((0.0, 0.0), |g| g.offset())
    }

    pub fn drag_rotation_deg(&self) -> f64 {
        self.gesture.map_or(0.0, |g| g.rotation_deg())
    }

    /// Lines of the details drawer for the front card
    pub fn details(&self) -> Option<Vec<String>> {
        let card = self.deck.current()?;
        Some(vec![
            format!("{} bedrooms, {} bathrooms", card.bedrooms, card.bathrooms),
            format!("{} square feet", card.sqft),
            card.address.clone(),
            format!("${} per month", card.cost),
        ])
    }

    /// Message shown once the deck runs out
    pub fn empty_message(&self) -> Option<&'static str> {
        self.deck.is_empty().then_some("No more listings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::initial_cards;

    #[test]
    fn test_buttons_walk_the_deck() {
        let mut view = HomeView::buttons_only(initial_cards());
        for _ in 0..8 {
            assert!(view.decide(true).is_some());
        }
        assert!(view.decide(false).is_none());
        assert_eq!(view.empty_message(), Some("No more listings"));
    }

    #[test]
    fn test_swipe_gesture_pops_card() {
        let mut view = HomeView::with_gestures(initial_cards(), 50.0);
        view.touch_start(200.0, 300.0);
        view.touch_move(120.0, 310.0);
        assert_eq!(view.drag_offset(), (-80.0, 10.0));
        assert!((view.drag_rotation_deg() + 8.0).abs() < 1e-9);

        let outcome = view.touch_end().unwrap();
        assert_eq!(outcome.decision, SwipeDecision::NotInterested);
        assert_eq!(view.deck().remaining(), 7);
        assert_eq!(view.drag_offset(), (0.0, 0.0));
    }

    #[test]
    fn test_alternate_ignores_touch() {
        let mut view = HomeView::buttons_only(initial_cards());
        view.touch_start(0.0, 0.0);
        view.touch_move(300.0, 0.0);
        assert!(view.touch_end().is_none());
        assert_eq!(view.deck().remaining(), 8);
    }

    #[test]
    fn test_details_for_front_card() {
        let view = HomeView::buttons_only(initial_cards());
        let details = view.details().unwrap();
        assert_eq!(details[0], "4 bedrooms, 3 bathrooms");
        assert_eq!(details[3], "$1466 per month");
    }
}
