// Integration tests for Quickstay

use chrono::NaiveDate;
use quickstay::config::Settings;
use quickstay::core::{filter_listings, FilterEngine, SearchOptions};
use quickstay::models::{FilterCriteria, ListingStatus, PriceRange};
use quickstay::routes::{Session, ViewState};
use quickstay::services::generate_listings;
use std::rc::Rc;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn create_engine(seed: u64) -> FilterEngine {
    FilterEngine::with_default_options(generate_listings(100, Some(seed), today()).into())
}

#[test]
fn test_integration_empty_criteria_is_identity() {
    for seed in 0..5 {
        let engine = create_engine(seed);
        let outcome = engine.apply(&FilterCriteria::default());

        let expected: Vec<&str> = engine.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(outcome.ids(), expected);
    }
}

#[test]
fn test_integration_tightening_never_grows() {
    for seed in 0..5 {
        let engine = create_engine(seed);

        let mut previous = usize::MAX;
        for guests in 1..=11 {
            let criteria = FilterCriteria {
                guests,
                ..Default::default()
            };
            let count = engine.apply(&criteria).len();
            assert!(count <= previous, "guests {} grew the result", guests);
            previous = count;
        }

        let mut previous = usize::MAX;
        for min in (0..=500).step_by(25) {
            let criteria = FilterCriteria {
                price: PriceRange::new(min, 500),
                ..Default::default()
            };
            let count = engine.apply(&criteria).len();
            assert!(count <= previous, "min price {} grew the result", min);
            previous = count;
        }

        let base = engine.apply(&FilterCriteria::default()).len();
        let flagged = engine
            .apply(&FilterCriteria {
                available_only: true,
                ..Default::default()
            })
            .len();
        assert!(flagged <= base);

        let windowed = engine
            .apply(&FilterCriteria {
                start_date: Some(today() + chrono::Duration::days(200)),
                ..Default::default()
            })
            .len();
        let narrowed = engine
            .apply(&FilterCriteria {
                start_date: Some(today() + chrono::Duration::days(200)),
                end_date: Some(today() + chrono::Duration::days(210)),
                ..Default::default()
            })
            .len();
        assert!(narrowed <= windowed);
    }
}

#[test]
fn test_integration_every_result_satisfies_criteria() {
    let engine = create_engine(9);
    let start = today() + chrono::Duration::days(60);
    let end = today() + chrono::Duration::days(120);

    let criteria = FilterCriteria {
        search: "apartment".to_string(),
        guests: 3,
        price: PriceRange::new(100, 350),
        available_only: true,
        deal_done_only: false,
        start_date: Some(start),
        end_date: Some(end),
    };

    let outcome = engine.apply(&criteria);
    assert!(outcome.search_applied);

    for ranked in &outcome.listings {
        let l = ranked.listing;
        assert!(l.guests >= 3);
        assert!(l.price >= 100 && l.price <= 350);
        assert_eq!(l.status, ListingStatus::Available);
        assert!(l.availability_start <= end && l.availability_end >= start);
        assert!(ranked.score.is_some());
    }

    // relevance order is non-decreasing in score
    let scores: Vec<f64> = outcome.listings.iter().filter_map(|r| r.score).collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_integration_search_narrows_by_title() {
    let catalog = generate_listings(100, Some(4), today());
    let criteria = FilterCriteria {
        search: "Penthouse".to_string(),
        ..Default::default()
    };

    let found = filter_listings(&catalog, &criteria, &SearchOptions::default());
    let penthouses = catalog.iter().filter(|l| l.title.starts_with("Penthouse")).count();

    assert!(found.len() >= penthouses);
    assert!(found.len() < catalog.len());
    // exact prefix hits rank first
    assert!(found
        .iter()
        .take(penthouses)
        .all(|l| l.title.starts_with("Penthouse")));
}

#[test]
fn test_integration_session_walkthrough() {
    let mut settings = Settings::default();
    settings.catalog.seed = Some(21);
    settings.catalog.size = 40;

    let mut session = Session::start(settings, today());
    assert_eq!(session.title(), "Quickstay");

    // swipe through the whole home deck
    let home = session.home().unwrap();
    let mut swiped = 0;
    while home.decide(swiped % 2 == 0).is_some() {
        swiped += 1;
    }
    assert_eq!(swiped, 8);

    // filter on the matches page
    session.navigate("/matches").unwrap();
    let matches = session.matches().unwrap();
    matches.set_price_range(100, 200).unwrap();
    matches.increment_guests();
    let outcome = matches.results();
    assert!(outcome
        .listings
        .iter()
        .all(|r| (100..=200).contains(&r.listing.price) && r.listing.guests >= 2));
    assert_eq!(outcome.total_listings, 40);

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["totalListings"], 40);

    // edit the profile
    match session.navigate("/profile").unwrap() {
        ViewState::Profile(editor) => {
            editor.open(quickstay::core::EditingField::Location);
            editor.set_location("Pittsburgh, PA").unwrap();
            assert_eq!(editor.save().unwrap().location, "Pittsburgh, PA");
        }
        other => panic!("expected profile view, got {:?}", other),
    }
}

#[test]
fn test_integration_engine_shares_catalog() {
    let catalog: Rc<[quickstay::models::Listing]> = generate_listings(10, Some(1), today()).into();
    let engine = FilterEngine::with_default_options(Rc::clone(&catalog));
    assert_eq!(Rc::strong_count(&catalog), 2);
    assert_eq!(engine.listings().len(), 10);
}
