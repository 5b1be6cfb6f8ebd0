use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking state of a listing as shown on the match grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "Deal Done")]
    DealDone,
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "No Resp.")]
    NoResponse,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 3] = [
        ListingStatus::DealDone,
        ListingStatus::Available,
        ListingStatus::NoResponse,
    ];

    /// Label used on the status badge
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::DealDone => "Deal Done",
            ListingStatus::Available => "Available",
            ListingStatus::NoResponse => "No Resp.",
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Synthetic nightly rental listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub status: ListingStatus,
    #[serde(rename = "availabilityStart")]
    pub availability_start: NaiveDate,
    #[serde(rename = "availabilityEnd")]
    pub availability_end: NaiveDate,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub guests: u32,
}

impl Listing {
    /// Whether the availability window intersects `[start, end]`, both ends inclusive
    #[inline]
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.availability_start <= end && self.availability_end >= start
    }
}

/// Rental shown on the swipe deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeCard {
    #[serde(rename = "distanceMi")]
    pub distance_mi: f64,
    pub bedrooms: u8,
    pub bathrooms: f32,
    pub sqft: u32,
    pub address: String,
    /// Monthly rent in dollars
    pub cost: u32,
    pub url: String,
}

impl SwipeCard {
    /// Badge text, e.g. `4 bd, 3 ba, 4280 sqft`
    pub fn layout_summary(&self) -> String {
        format!("{} bd, {} ba, {} sqft", self.bedrooms, self.bathrooms, self.sqft)
    }
}

/// Accept/reject choice on the front card of the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDecision {
    Interested,
    NotInterested,
}

impl SwipeDecision {
    pub fn from_accept(accept: bool) -> Self {
        if accept {
            SwipeDecision::Interested
        } else {
            SwipeDecision::NotInterested
        }
    }
}

/// The renter's own profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub image: String,
    /// Monthly budget as `(min, max)` dollars
    pub budget: (u32, u32),
    /// Desired stay as `(start, end)`
    pub dates: (NaiveDate, NaiveDate),
    pub location: String,
    #[serde(rename = "notificationEnabled")]
    pub notification_enabled: bool,
}
