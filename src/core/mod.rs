// Core algorithm exports
pub mod deck;
pub mod engine;
pub mod filters;
pub mod profile;
pub mod search;

pub use deck::{DragGesture, SwipeDeck, SwipeOutcome};
pub use engine::{filter_listings, FilterEngine};
pub use filters::{matches_criteria, matches_dates, matches_guests, matches_price, matches_status};
pub use profile::{EditingField, ProfileEditor};
pub use search::{FuzzyIndex, SearchHit, SearchOptions};
