use std::rc::Rc;

use crate::core::filters::matches_criteria;
use crate::core::search::{FuzzyIndex, SearchOptions};
use crate::models::{FilterCriteria, FilterOutcome, Listing, RankedListing};

/// Default number of distinct queries kept in the search memo
pub const DEFAULT_CACHE_SIZE: usize = 64;

/// Filter pipeline over a fixed listing catalogue
///
/// # Pipeline Stages
/// 1. Fuzzy title search (only when the search text is non-empty), which
///    also replaces collection order with relevance order
/// 2. Guest capacity
/// 3. Price range
/// 4. Status flags
/// 5. Availability dates
///
/// Stages 2-5 are pure predicates; the order in which they run does not change
/// the result.
///
/// The catalogue is shared with the owning session through `Rc`. Like its
/// search memo, an engine stays on the thread that built it.
#[derive(Debug)]
pub struct FilterEngine {
    listings: Rc<[Listing]>,
    index: FuzzyIndex,
}

impl FilterEngine {
    pub fn new(listings: Rc<[Listing]>, options: SearchOptions, cache_size: usize) -> Self {
        let index = FuzzyIndex::new(&listings, options, cache_size);
        Self { listings, index }
    }

    pub fn with_default_options(listings: Rc<[Listing]>) -> Self {
        Self::new(listings, SearchOptions::default(), DEFAULT_CACHE_SIZE)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn search_options(&self) -> &SearchOptions {
        self.index.options()
    }

    /// Apply `criteria` to the catalogue
    pub fn apply(&self, criteria: &FilterCriteria) -> FilterOutcome<'_> {
        let total_listings = self.listings.len();
        let search_applied = criteria.has_search();

        let candidates: Vec<RankedListing<'_>> = if search_applied {
            self.index
                .search(&criteria.search)
                .iter()
                .map(|hit| RankedListing {
                    listing: &self.listings[hit.index],
                    score: Some(hit.score),
                })
                .collect()
        } else {
            self.listings
                .iter()
                .map(|listing| RankedListing { listing, score: None })
                .collect()
        };

        let searched = candidates.len();

        let listings: Vec<RankedListing<'_>> = candidates
            .into_iter()
            .filter(|ranked| matches_criteria(ranked.listing, criteria))
            .collect();

        tracing::debug!(
            "Filtered {} listings: {} after search, {} after criteria",
            total_listings,
            searched,
            listings.len()
        );

        FilterOutcome {
            listings,
            total_listings,
            search_applied,
        }
    }
}

/// One-shot filter over any slice of listings
///
/// Builds a throwaway search index; prefer [`FilterEngine`] when the same
/// catalogue is filtered repeatedly.
pub fn filter_listings<'a>(
    listings: &'a [Listing],
    criteria: &FilterCriteria,
    options: &SearchOptions,
) -> Vec<&'a Listing> {
    if !criteria.has_search() {
        return listings
            .iter()
            .filter(|listing| matches_criteria(listing, criteria))
            .collect();
    }

    let index = FuzzyIndex::new(listings, *options, 0);
    let hits = index.search(&criteria.search);
    hits.iter()
        .map(|hit| &listings[hit.index])
        .filter(|listing| matches_criteria(listing, criteria))
        .collect()
}
