use std::rc::Rc;

use chrono::NaiveDate;
use validator::Validate;

use crate::config::FilterDefaults;
use crate::core::engine::FilterEngine;
use crate::core::profile::display_date;
use crate::core::search::SearchOptions;
use crate::error::Result;
use crate::models::{DateWindow, FilterCriteria, FilterOutcome, Listing, PriceRange};

/// State of the matches grid: the engine over the session catalogue plus the
/// criteria currently selected in the filter popovers
#[derive(Debug)]
pub struct MatchesView {
    engine: FilterEngine,
    criteria: FilterCriteria,
    defaults: FilterDefaults,
}

impl MatchesView {
    pub fn new(
        catalog: Rc<[Listing]>,
        options: SearchOptions,
        cache_size: usize,
        defaults: FilterDefaults,
    ) -> Self {
        let criteria = FilterCriteria {
            guests: defaults.guests,
            price: defaults.price(),
            ..Default::default()
        };

        Self {
            engine: FilterEngine::new(catalog, options, cache_size),
            criteria,
            defaults,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace every criterion at once
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) -> Result<()> {
        criteria.validate()?;
        tracing::debug!("Criteria replaced: {:?}", criteria);
        self.criteria = criteria;
        Ok(())
    }

    /// Listings matching the current criteria, in display order
    pub fn results(&self) -> FilterOutcome<'_> {
        self.engine.apply(&self.criteria)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
    }

    pub fn increment_guests(&mut self) -> u32 {
        self.criteria.guests = self.criteria.guests.saturating_add(1);
        self.criteria.guests
    }

    /// Never goes below one guest
    pub fn decrement_guests(&mut self) -> u32 {
        self.criteria.guests = self.criteria.guests.saturating_sub(1).max(1);
        self.criteria.guests
    }

    pub fn set_price_range(&mut self, min: u32, max: u32) -> Result<()> {
        let candidate = FilterCriteria {
            price: PriceRange::new(min, max),
            ..self.criteria.clone()
        };
        self.apply_criteria(candidate)
    }

    pub fn set_dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
        let candidate = FilterCriteria {
            start_date: start,
            end_date: end,
            ..self.criteria.clone()
        };
        self.apply_criteria(candidate)
    }

    pub fn set_available_only(&mut self, on: bool) {
        self.criteria.available_only = on;
    }

    pub fn set_deal_done_only(&mut self, on: bool) {
        self.criteria.deal_done_only = on;
    }

    pub fn reset_dates(&mut self) {
        self.criteria.start_date = None;
        self.criteria.end_date = None;
    }

    pub fn reset_guests(&mut self) {
        self.criteria.guests = self.defaults.guests;
    }

    pub fn reset_price(&mut self) {
        self.criteria.price = self.defaults.price();
    }

    /// Clears both status flags
    pub fn reset_more_filters(&mut self) {
        self.criteria.available_only = false;
        self.criteria.deal_done_only = false;
    }

    /// Caption printed under each card describing the selected stay
    pub fn stay_label(&self) -> Option<String> {
        match self.criteria.date_window() {
            DateWindow::Any => None,
            DateWindow::Between(start, end) => Some(format!(
                "Stay: {} - {}",
                display_date(start),
                display_date(end)
            )),
            DateWindow::From(start) => Some(format!("Stay from: {}", display_date(start))),
            DateWindow::Until(end) => Some(format!("Stay until: {}", display_date(end))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_view() -> MatchesView {
        let catalog: Rc<[Listing]> = (1..=4)
            .map(|i| Listing {
                id: format!("L{}", i),
                title: format!("Loft Apartment in Uptown Furnished {}", i),
                price: 100 * i,
                status: if i % 2 == 0 { ListingStatus::Available } else { ListingStatus::DealDone },
                availability_start: date(2026, i as u32, 1),
                availability_end: date(2026, i as u32, 20),
                image_url: String::new(),
                guests: i,
            })
            .collect::<Vec<_>>()
            .into();

        MatchesView::new(catalog, SearchOptions::default(), 8, FilterDefaults::default())
    }

    #[test]
    fn test_guest_stepper_floor() {
        let mut view = create_view();
        assert_eq!(view.decrement_guests(), 1);
        assert_eq!(view.increment_guests(), 2);
        assert_eq!(view.increment_guests(), 3);
        assert_eq!(view.results().ids(), vec!["L3", "L4"]);

        view.reset_guests();
        assert_eq!(view.criteria().guests, 1);
    }

    #[test]
    fn test_price_setter_validates() {
        let mut view = create_view();
        assert!(view.set_price_range(300, 100).is_err());
        assert_eq!(view.criteria().price, PriceRange::new(0, 500));

        view.set_price_range(150, 300).unwrap();
        assert_eq!(view.results().ids(), vec!["L2", "L3"]);

        view.reset_price();
        assert_eq!(view.results().len(), 4);
    }

    #[test]
    fn test_date_setter_and_labels() {
        let mut view = create_view();
        assert_eq!(view.stay_label(), None);

        view.set_dates(Some(date(2026, 2, 10)), Some(date(2026, 3, 5))).unwrap();
        assert_eq!(view.stay_label().as_deref(), Some("Stay: 2/10/2026 - 3/5/2026"));
        assert_eq!(view.results().ids(), vec!["L2", "L3"]);

        view.set_dates(Some(date(2026, 3, 21)), None).unwrap();
        assert_eq!(view.stay_label().as_deref(), Some("Stay from: 3/21/2026"));
        assert_eq!(view.results().ids(), vec!["L4"]);

        view.set_dates(None, Some(date(2026, 1, 1))).unwrap();
        assert_eq!(view.stay_label().as_deref(), Some("Stay until: 1/1/2026"));
        assert_eq!(view.results().ids(), vec!["L1"]);

        assert!(view.set_dates(Some(date(2026, 5, 1)), Some(date(2026, 4, 1))).is_err());

        view.reset_dates();
        assert_eq!(view.results().len(), 4);
    }

    #[test]
    fn test_status_flags_and_reset() {
        let mut view = create_view();
        view.set_available_only(true);
        assert_eq!(view.results().ids(), vec!["L2", "L4"]);

        view.set_deal_done_only(true);
        assert!(view.results().is_empty());

        view.reset_more_filters();
        assert_eq!(view.results().len(), 4);
    }

    #[test]
    fn test_search_reorders() {
        let mut view = create_view();
        view.set_search("loft");
        let outcome = view.results();
        assert!(outcome.search_applied);
        assert_eq!(outcome.len(), 4);
    }
}
