use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const DEFAULT_GUESTS: u32 = 1;
pub const DEFAULT_PRICE_MIN: u32 = 0;
pub const DEFAULT_PRICE_MAX: u32 = 500;

/// Inclusive nightly price bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_MIN,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

/// Which part of the availability window a date selection constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    Any,
    From(NaiveDate),
    Until(NaiveDate),
    Between(NaiveDate, NaiveDate),
}

/// Criteria selected on the matches view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_ranges", skip_on_field_errors = false))]
pub struct FilterCriteria {
    #[serde(default)]
    pub search: String,
    #[validate(range(min = 1))]
    #[serde(default = "default_guests")]
    pub guests: u32,
    #[serde(default)]
    pub price: PriceRange,
    #[serde(default, alias = "available_only", rename = "availableOnly")]
    pub available_only: bool,
    #[serde(default, alias = "deal_done_only", rename = "dealDoneOnly")]
    pub deal_done_only: bool,
    #[serde(default, alias = "start_date", rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, alias = "end_date", rename = "endDate")]
    pub end_date: Option<NaiveDate>,
}

fn default_guests() -> u32 {
    DEFAULT_GUESTS
}

fn validate_ranges(criteria: &FilterCriteria) -> Result<(), ValidationError> {
    if criteria.price.min > criteria.price.max {
        let mut err = ValidationError::new("price_range");
        err.message = Some("minimum price exceeds maximum price".into());
        return Err(err);
    }

    if let (Some(start), Some(end)) = (criteria.start_date, criteria.end_date) {
        if end < start {
            let mut err = ValidationError::new("date_range");
            err.message = Some("end date precedes start date".into());
            return Err(err);
        }
    }

    Ok(())
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            guests: DEFAULT_GUESTS,
            price: PriceRange::default(),
            available_only: false,
            deal_done_only: false,
            start_date: None,
            end_date: None,
        }
    }
}

impl FilterCriteria {
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn date_window(&self) -> DateWindow {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => DateWindow::Between(start, end),
            (Some(start), None) => DateWindow::From(start),
            (None, Some(end)) => DateWindow::Until(end),
            (None, None) => DateWindow::Any,
        }
    }
}
