use serde::Serialize;
use crate::models::domain::Listing;

/// A listing retained by the filter engine
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedListing<'a> {
    #[serde(flatten)]
    pub listing: &'a Listing,
    /// Fuzzy relevance, lower is better; `None` when no search ran
    #[serde(rename = "searchScore", skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Result of applying criteria to the listing catalogue
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome<'a> {
    pub listings: Vec<RankedListing<'a>>,
    #[serde(rename = "totalListings")]
    pub total_listings: usize,
    #[serde(rename = "searchApplied")]
    pub search_applied: bool,
}

impl<'a> FilterOutcome<'a> {
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.listings.iter().map(|r| r.listing.id.as_str()).collect()
    }
}

/// One row of the profile page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSection {
    pub title: &'static str,
    pub value: String,
    /// Whether the row opens the editor rather than toggling in place
    pub editable: bool,
}
