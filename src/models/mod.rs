// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Listing, ListingStatus, SwipeCard, SwipeDecision, UserProfile};
pub use requests::{DateWindow, FilterCriteria, PriceRange};
pub use responses::{FilterOutcome, ProfileSection, RankedListing};
