// Data sources backing a session
pub mod cache;
pub mod cards;
pub mod listings;

pub use cache::SearchCache;
pub use cards::initial_cards;
pub use listings::{generate_listings, ListingGenerator, DEFAULT_CATALOG_SIZE};
