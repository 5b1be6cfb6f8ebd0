use crate::models::{DateWindow, FilterCriteria, Listing, ListingStatus};

/// Check the listing sleeps at least the requested number of guests
#[inline]
pub fn matches_guests(listing: &Listing, guests: u32) -> bool {
    listing.guests >= guests
}

/// Check the nightly price lies inside the selected range, both ends inclusive
#[inline]
pub fn matches_price(listing: &Listing, criteria: &FilterCriteria) -> bool {
    criteria.price.contains(listing.price)
}

/// Check the status flags
///
/// Each set flag narrows independently, so setting both rejects everything:
/// no listing is Available and Deal Done at once.
#[inline]
pub fn matches_status(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if criteria.available_only && listing.status != ListingStatus::Available {
        return false;
    }

    if criteria.deal_done_only && listing.status != ListingStatus::DealDone {
        return false;
    }

    true
}

/// Check the availability window against the selected dates
#[inline]
pub fn matches_dates(listing: &Listing, window: DateWindow) -> bool {
    match window {
        DateWindow::Any => true,
        DateWindow::Between(start, end) => listing.overlaps(start, end),
        DateWindow::From(start) => listing.availability_end >= start,
        DateWindow::Until(end) => listing.availability_start <= end,
    }
}

/// Every non-search criterion at once
#[inline]
pub fn matches_criteria(listing: &Listing, criteria: &FilterCriteria) -> bool {
    matches_guests(listing, criteria.guests)
        && matches_price(listing, criteria)
        && matches_status(listing, criteria)
        && matches_dates(listing, criteria.date_window())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRange;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_listing(status: ListingStatus) -> Listing {
        Listing {
            id: "test_listing".to_string(),
            title: "Studio Apartment in Downtown with Balcony".to_string(),
            price: 150,
            status,
            availability_start: date(2026, 6, 1),
            availability_end: date(2026, 6, 30),
            image_url: "https://picsum.photos/seed/test/640/480".to_string(),
            guests: 4,
        }
    }

    #[test]
    fn test_guests_boundary() {
        let listing = create_test_listing(ListingStatus::Available);
        assert!(matches_guests(&listing, 4));
        assert!(!matches_guests(&listing, 5));
    }

    #[test]
    fn test_price_inclusive() {
        let listing = create_test_listing(ListingStatus::Available);
        let mut criteria = FilterCriteria {
            price: PriceRange::new(150, 150),
            ..Default::default()
        };
        assert!(matches_price(&listing, &criteria));

        criteria.price = PriceRange::new(151, 500);
        assert!(!matches_price(&listing, &criteria));
    }

    #[test]
    fn test_status_flags_compose_as_and() {
        let criteria = FilterCriteria {
            available_only: true,
            deal_done_only: true,
            ..Default::default()
        };

        for status in ListingStatus::ALL {
            assert!(!matches_status(&create_test_listing(status), &criteria));
        }
    }

    #[test]
    fn test_available_only() {
        let criteria = FilterCriteria {
            available_only: true,
            ..Default::default()
        };
        assert!(matches_status(&create_test_listing(ListingStatus::Available), &criteria));
        assert!(!matches_status(&create_test_listing(ListingStatus::NoResponse), &criteria));
    }

    #[test]
    fn test_date_windows() {
        let listing = create_test_listing(ListingStatus::Available);

        assert!(matches_dates(&listing, DateWindow::Any));
        assert!(matches_dates(&listing, DateWindow::From(date(2026, 6, 30))));
        assert!(!matches_dates(&listing, DateWindow::From(date(2026, 7, 1))));
        assert!(matches_dates(&listing, DateWindow::Until(date(2026, 6, 1))));
        assert!(!matches_dates(&listing, DateWindow::Until(date(2026, 5, 31))));
        assert!(matches_dates(&listing, DateWindow::Between(date(2026, 5, 1), date(2026, 6, 1))));
        assert!(!matches_dates(&listing, DateWindow::Between(date(2026, 7, 1), date(2026, 7, 5))));
    }

    #[test]
    fn test_default_criteria_accepts() {
        let listing = create_test_listing(ListingStatus::NoResponse);
        assert!(matches_criteria(&listing, &FilterCriteria::default()));
    }
}
