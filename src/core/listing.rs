//! Listing filter engine and the page-local listing state
//!
//! [`apply`] is the pure core: filter, stable sort, slice. [`ListingState`]
//! owns the user's current criteria and page and recomputes the view from
//! scratch on every call.

use crate::core::entity::{CatalogEntry, Rating};
use crate::core::events::{Transition, UiEffect};
use crate::core::query::{
    DEFAULT_PAGE_SIZE, FilterCriteria, ListingPage, PaginatedResponse, PaginationMeta, PriceRange,
    SortKey, total_pages,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Filter, sort and paginate a catalog.
///
/// `page` is 1-based. A page past the end yields no items; clamping is the
/// caller's job. Source records are never mutated, the returned items are
/// clones.
pub fn apply<T>(
    catalog: &[T],
    criteria: &FilterCriteria,
    sort_key: SortKey,
    page: usize,
    page_size: usize,
) -> ListingPage<T>
where
    T: CatalogEntry + Clone,
{
    let mut matched = filter(catalog, criteria);
    sort(&mut matched, sort_key);

    let page_size = page_size.max(1);
    let total_pages = total_pages(matched.len(), page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);

    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    ListingPage { items, total_pages }
}

/// Entries passing every predicate, in catalog order
pub fn filter<'a, T: CatalogEntry>(catalog: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    catalog
        .iter()
        .filter(|e| criteria.matches_search(*e))
        .filter(|e| criteria.matches_category(*e))
        .filter(|e| criteria.matches_rating(*e))
        .filter(|e| criteria.matches_price(*e))
        .filter(|e| criteria.matches_favorite(*e))
        .collect()
}

/// Stable sort by `key`; equal keys keep their relative order
pub fn sort<T: CatalogEntry>(entries: &mut [&T], key: SortKey) {
    match key {
        SortKey::RatingDesc => entries.sort_by(|a, b| b.rating().cmp(&a.rating())),
        SortKey::RatingAsc => entries.sort_by(|a, b| a.rating().cmp(&b.rating())),
        SortKey::DeliveryTimeAsc => entries.sort_by_key(|e| delivery_sort_key(*e)),
        SortKey::NameAsc => entries.sort_by(|a, b| compare_names(a.name(), b.name())),
        SortKey::NameDesc => entries.sort_by(|a, b| compare_names(b.name(), a.name())),
    }
}

// Missing estimates sort after every numeric one.
fn delivery_sort_key<T: CatalogEntry>(entry: &T) -> (bool, u32) {
    match entry.delivery_estimate().leading_minutes() {
        Some(minutes) => (false, minutes),
        None => (true, 0),
    }
}

/// Case-insensitive name ordering with a byte-order tie-break
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// =============================================================================
// Listing state
// =============================================================================

/// The listing page's own state: criteria, sort and current page.
///
/// Every setter consumes the state and returns a new one reset to page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingState {
    criteria: FilterCriteria,
    sort_key: SortKey,
    page: usize,
    page_size: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, SortKey::default())
    }
}

impl ListingState {
    pub fn new(page_size: usize, sort_key: SortKey) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort_key,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the whole criteria set
    pub fn with_criteria(self, criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            page: 1,
            ..self
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        let criteria = FilterCriteria {
            search: search.into(),
            ..self.criteria.clone()
        };
        self.with_criteria(criteria)
    }

    /// `None` selects all categories
    pub fn with_category(self, category: Option<String>) -> Self {
        let criteria = FilterCriteria {
            category,
            ..self.criteria.clone()
        };
        self.with_criteria(criteria)
    }

    pub fn with_min_rating(self, min_rating: Rating) -> Self {
        let criteria = FilterCriteria {
            min_rating,
            ..self.criteria.clone()
        };
        self.with_criteria(criteria)
    }

    /// Star button behaviour: picking the active threshold again clears it
    pub fn toggle_min_rating(self, stars: Rating) -> Self {
        let next = if self.criteria.min_rating == stars {
            Rating::MIN
        } else {
            stars
        };
        self.with_min_rating(next)
    }

    pub fn with_price_range(self, price_range: PriceRange) -> Self {
        let criteria = FilterCriteria {
            price_range,
            ..self.criteria.clone()
        };
        self.with_criteria(criteria)
    }

    pub fn with_favorites_only(self, favorites_only: bool) -> Self {
        let criteria = FilterCriteria {
            favorites_only,
            ..self.criteria.clone()
        };
        self.with_criteria(criteria)
    }

    pub fn with_sort(self, sort_key: SortKey) -> Self {
        Self {
            sort_key,
            page: 1,
            ..self
        }
    }

    /// Move to `page` if it exists for `catalog` under the current criteria.
    ///
    /// Out-of-range requests leave the state untouched, as a disabled
    /// previous/next control would.
    pub fn go_to_page<T: CatalogEntry>(self, catalog: &[T], page: usize) -> Transition<Self> {
        let total = filter(catalog, &self.criteria).len();
        let pages = total_pages(total, self.page_size);

        if page < 1 || page > pages {
            tracing::debug!(page, total_pages = pages, "page change ignored");
            return Transition::quiet(self);
        }

        tracing::debug!(from = self.page, to = page, "listing page changed");
        Transition::quiet(Self { page, ..self }).with_effect(UiEffect::ScrollToTop)
    }

    pub fn next_page<T: CatalogEntry>(self, catalog: &[T]) -> Transition<Self> {
        let page = self.page + 1;
        self.go_to_page(catalog, page)
    }

    pub fn previous_page<T: CatalogEntry>(self, catalog: &[T]) -> Transition<Self> {
        let page = self.page.saturating_sub(1);
        self.go_to_page(catalog, page)
    }

    /// The current page of `catalog` with pagination metadata
    pub fn view<T: CatalogEntry + Clone>(&self, catalog: &[T]) -> PaginatedResponse<T> {
        let total = filter(catalog, &self.criteria).len();
        let page = apply(
            catalog,
            &self.criteria,
            self.sort_key,
            self.page,
            self.page_size,
        );

        PaginatedResponse {
            data: page.items,
            pagination: PaginationMeta::new(self.page, self.page_size, total),
        }
    }
}
