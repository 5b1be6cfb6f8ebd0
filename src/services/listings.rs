use chrono::{Duration, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Listing, ListingStatus};

/// Catalogue size when nothing else is configured
pub const DEFAULT_CATALOG_SIZE: usize = 100;

const APARTMENT_TYPES: [&str; 5] = ["Studio", "1-Bedroom", "2-Bedroom", "Loft", "Penthouse"];
const LOCATIONS: [&str; 5] = ["Downtown", "Suburban", "Uptown", "City Center", "Near Park"];
const AMENITIES: [&str; 5] = [
    "with Balcony",
    "Near Public Transport",
    "Furnished",
    "Pet-Friendly",
    "Hardwood Floors",
];

const MIN_PRICE: u32 = 50;
const MAX_PRICE: u32 = 500;
const MIN_GUESTS: u32 = 1;
const MAX_GUESTS: u32 = 10;
const MAX_STAY_MONTHS: u32 = 6;

/// Synthetic listing source
///
/// Availability starts somewhere in the year after `today` and ends between
/// one day and six months later. Passing a seed makes the catalogue
/// reproducible.
pub struct ListingGenerator {
    rng: StdRng,
    today: NaiveDate,
}

impl ListingGenerator {
    pub fn new(seed: Option<u64>, today: NaiveDate) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, today }
    }

    pub fn generate(&mut self, count: usize) -> Vec<Listing> {
        let listings: Vec<Listing> = (0..count).map(|_| self.next_listing()).collect();
        tracing::info!("Generated {} mock listings", listings.len());
        listings
    }

    pub fn next_listing(&mut self) -> Listing {
        let kind = self.pick(&APARTMENT_TYPES);
        let location = self.pick(&LOCATIONS);
        let amenity = self.pick(&AMENITIES);

        let year_out = add_months(self.today, 12);
        let availability_start = self.date_between(self.today, year_out);

        let stay_months = self.rng.gen_range(1..=MAX_STAY_MONTHS);
        let earliest_end = availability_start + Duration::days(1);
        let latest_end = add_months(earliest_end, stay_months);
        let availability_end = self.date_between(earliest_end, latest_end);

        let id = self.uuid();
        let image_seed = self.uuid();
        let status = ListingStatus::ALL[self.rng.gen_range(0..ListingStatus::ALL.len())];

        Listing {
            id,
            title: format!("{} Apartment in {} {}", kind, location, amenity),
            price: self.rng.gen_range(MIN_PRICE..=MAX_PRICE),
            status,
            availability_start,
            availability_end,
            image_url: format!("https://picsum.photos/seed/{}/640/480", image_seed),
            guests: self.rng.gen_range(MIN_GUESTS..=MAX_GUESTS),
        }
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items[self.rng.gen_range(0..items.len())]
    }

    fn date_between(&mut self, from: NaiveDate, to: NaiveDate) -> NaiveDate {
        let span = (to - from).num_days().max(0);
        from + Duration::days(self.rng.gen_range(0..=span))
    }

    fn uuid(&mut self) -> String {
        uuid::Builder::from_random_bytes(self.rng.gen())
            .into_uuid()
            .to_string()
    }
}

/// Month arithmetic that clamps to the end of shorter months
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Generate `count` listings starting from `today`
pub fn generate_listings(count: usize, seed: Option<u64>, today: NaiveDate) -> Vec<Listing> {
    ListingGenerator::new(seed, today).generate(count)
}
