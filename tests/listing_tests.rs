//! Integration tests for the listing filter engine

use storefront::prelude::*;

/// The twelve restaurants of the listing page, without the detail-only one
fn listing_restaurants() -> Vec<Restaurant> {
    InMemoryCatalog::seeded()
        .unwrap()
        .restaurants()
        .iter()
        .filter(|r| r.slug != "the-epicurean-eden")
        .cloned()
        .collect()
}

fn ids(items: &[Restaurant]) -> Vec<&str> {
    items.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_rating_desc_first_two_pages() {
    let restaurants = listing_restaurants();
    assert_eq!(restaurants.len(), 12);

    let criteria = FilterCriteria::default();
    let page1 = listing::apply(&restaurants, &criteria, SortKey::RatingDesc, 1, 8);
    let page2 = listing::apply(&restaurants, &criteria, SortKey::RatingDesc, 2, 8);

    assert_eq!(page1.total_pages, 2);
    // Ties keep catalog order: 6 before 11, 4 before 9, 1 before 10
    assert_eq!(ids(&page1.items), vec!["8", "2", "6", "11", "4", "9", "1", "10"]);
    assert_eq!(ids(&page2.items), vec!["7", "5", "12", "3"]);
}

#[test]
fn test_every_item_passes_every_predicate() {
    let restaurants = listing_restaurants();
    let criteria = FilterCriteria {
        min_rating: Rating::stars(4).unwrap(),
        price_range: PriceRange::new(PriceTier::Moderate, PriceTier::Premium),
        ..Default::default()
    };

    let page = listing::apply(&restaurants, &criteria, SortKey::NameAsc, 1, 100);
    assert!(!page.items.is_empty());
    for r in &page.items {
        assert!(criteria.matches(r), "{} should not be listed", r.name);
        assert!(r.price_tier >= PriceTier::Moderate);
    }
    assert!(page.items.iter().all(|r| r.price_tier != PriceTier::Budget));
}

#[test]
fn test_no_matches_has_zero_pages() {
    let restaurants = listing_restaurants();
    let criteria = FilterCriteria {
        search: "xyz".to_string(),
        ..Default::default()
    };
    let page = listing::apply(&restaurants, &criteria, SortKey::RatingDesc, 1, 8);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[test]
fn test_search_is_case_insensitive() {
    let restaurants = listing_restaurants();
    let criteria = FilterCriteria {
        search: "PASTA".to_string(),
        ..Default::default()
    };
    let page = listing::apply(&restaurants, &criteria, SortKey::RatingDesc, 1, 8);
    assert_eq!(ids(&page.items), vec!["8"]);
}

#[test]
fn test_favorites_only() {
    let restaurants = listing_restaurants();
    let criteria = FilterCriteria {
        favorites_only: true,
        ..Default::default()
    };
    let page = listing::apply(&restaurants, &criteria, SortKey::NameAsc, 1, 8);
    assert_eq!(ids(&page.items), vec!["1", "4", "9"]);
}

#[test]
fn test_delivery_time_sort_uses_leading_minutes() {
    let restaurants = listing_restaurants();
    let page = listing::apply(
        &restaurants,
        &FilterCriteria::default(),
        SortKey::DeliveryTimeAsc,
        1,
        3,
    );
    // 20-30, then the two 25-35 in catalog order
    assert_eq!(ids(&page.items), vec!["4", "3", "11"]);
}

#[test]
fn test_page_past_end_is_empty() {
    let restaurants = listing_restaurants();
    let page = listing::apply(&restaurants, &FilterCriteria::default(), SortKey::RatingDesc, 3, 8);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 2);
}

#[test]
fn test_changing_filters_resets_page() {
    let restaurants = listing_restaurants();
    let state = ListingState::default().next_page(&restaurants).state;
    assert_eq!(state.page(), 2);

    assert_eq!(state.clone().with_search("thai").page(), 1);
    assert_eq!(state.clone().with_sort(SortKey::NameDesc).page(), 1);
    assert_eq!(state.clone().with_favorites_only(true).page(), 1);
    assert_eq!(state.with_category(Some("Thai".to_string())).page(), 1);
}

#[test]
fn test_rating_and_price_filters_reset_page() {
    let restaurants = listing_restaurants();
    let state = ListingState::default().next_page(&restaurants).state;
    assert_eq!(state.page(), 2);

    let four = Rating::stars(4).unwrap();
    let rated = state.clone().with_min_rating(four);
    assert_eq!(rated.page(), 1);
    assert_eq!(rated.criteria().min_rating, four);

    let toggled_on = state.clone().toggle_min_rating(four);
    assert_eq!(toggled_on.page(), 1);
    assert_eq!(toggled_on.criteria().min_rating, four);

    // Every listed restaurant rates 4+, so page 2 still exists
    let on_page_two = ListingState::default()
        .with_min_rating(four)
        .next_page(&restaurants)
        .state;
    assert_eq!(on_page_two.page(), 2);

    // Picking the active threshold again clears it
    let toggled_off = on_page_two.toggle_min_rating(four);
    assert_eq!(toggled_off.page(), 1);
    assert_eq!(toggled_off.criteria().min_rating, Rating::MIN);

    let priced = state.with_price_range(PriceRange::new(PriceTier::Budget, PriceTier::Moderate));
    assert_eq!(priced.page(), 1);
    assert_eq!(priced.criteria().price_range.hi, PriceTier::Moderate);
}

#[test]
fn test_paging_controls() {
    let restaurants = listing_restaurants();
    let state = ListingState::default();

    let t = state.clone().previous_page(&restaurants);
    assert_eq!(t.state, state);
    assert!(t.effects.is_empty());

    let t = state.next_page(&restaurants);
    assert_eq!(t.state.page(), 2);
    assert!(t.scrolls_to_top());

    let t = t.state.next_page(&restaurants);
    assert_eq!(t.state.page(), 2);
    assert!(!t.scrolls_to_top());
}

#[test]
fn test_view_metadata() {
    let restaurants = listing_restaurants();
    let view = ListingState::default()
        .with_category(Some("Italian".to_string()))
        .view(&restaurants);
    assert_eq!(view.data.len(), 2);
    assert_eq!(view.pagination.total, 2);
    assert_eq!(view.pagination.total_pages, 1);
    assert!(!view.pagination.is_paginated());
    assert!(!view.pagination.has_next);
}

#[test]
fn test_source_is_not_mutated() {
    let restaurants = listing_restaurants();
    let before = restaurants.clone();
    let _ = listing::apply(&restaurants, &FilterCriteria::default(), SortKey::NameDesc, 1, 8);
    assert_eq!(restaurants, before);
}
