//! Quickstay - rental listing browser core
//!
//! This library holds everything behind the Quickstay pages: the mock listing
//! catalogue, the multi-criterion filter engine with fuzzy title search, the
//! swipe deck and the profile editor, tied together by a per-session router.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_listings, FilterEngine, ProfileEditor, SearchOptions, SwipeDeck};
pub use crate::error::{QuickstayError, Result};
pub use crate::models::{FilterCriteria, FilterOutcome, Listing, ListingStatus, PriceRange, SwipeCard};
pub use crate::routes::{Session, View};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let criteria = FilterCriteria::default();
        assert!(filter_listings(&[], &criteria, &SearchOptions::default()).is_empty());
    }
}
