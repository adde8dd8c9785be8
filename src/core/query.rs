//! Listing criteria, sort keys and pagination types

use crate::core::entity::{CatalogEntry, PriceTier, Rating};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of entries per listing page
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Filter predicates for a listing view
///
/// All fields default to "no filter". Predicates are conjoined: an entry is
/// kept only if it passes every one of them.
///
/// # Example
/// ```rust,ignore
/// let criteria = FilterCriteria {
///     search: "pasta".to_string(),
///     category: Some("Italian".to_string()),
///     min_rating: Rating::stars(4)?,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the entry name
    pub search: String,

    /// Exact category label
    pub category: Option<String>,

    /// Inclusive lower bound on the rating
    pub min_rating: Rating,

    /// Inclusive price tier range
    pub price_range: PriceRange,

    /// Keep only favorites
    pub favorites_only: bool,
}

impl FilterCriteria {
    pub fn matches_search<T: CatalogEntry>(&self, entry: &T) -> bool {
        self.search.is_empty()
            || entry
                .name()
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    pub fn matches_category<T: CatalogEntry>(&self, entry: &T) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| entry.category() == category)
    }

    pub fn matches_rating<T: CatalogEntry>(&self, entry: &T) -> bool {
        entry.rating() >= self.min_rating
    }

    pub fn matches_price<T: CatalogEntry>(&self, entry: &T) -> bool {
        self.price_range.contains(entry.price_tier())
    }

    pub fn matches_favorite<T: CatalogEntry>(&self, entry: &T) -> bool {
        !self.favorites_only || entry.is_favorite()
    }

    /// All predicates at once
    pub fn matches<T: CatalogEntry>(&self, entry: &T) -> bool {
        self.matches_search(entry)
            && self.matches_category(entry)
            && self.matches_rating(entry)
            && self.matches_price(entry)
            && self.matches_favorite(entry)
    }
}

/// Inclusive range of price tiers. `lo > hi` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lo: PriceTier,
    pub hi: PriceTier,
}

impl PriceRange {
    pub fn new(lo: PriceTier, hi: PriceTier) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, tier: PriceTier) -> bool {
        self.lo <= tier && tier <= self.hi
    }

    /// Slider label, e.g. `"$ - $$$"`
    pub fn label(&self) -> String {
        format!("{} - {}", self.lo.label(), self.hi.label())
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            lo: PriceTier::Budget,
            hi: PriceTier::Premium,
        }
    }
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    RatingDesc,
    RatingAsc,
    DeliveryTimeAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::RatingDesc,
        SortKey::RatingAsc,
        SortKey::DeliveryTimeAsc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::RatingDesc => "rating_desc",
            SortKey::RatingAsc => "rating_asc",
            SortKey::DeliveryTimeAsc => "delivery_time_asc",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
        }
    }

    /// Label shown in the sort dropdown
    pub fn label(self) -> &'static str {
        match self {
            SortKey::RatingDesc => "Rating (High to Low)",
            SortKey::RatingAsc => "Rating (Low to High)",
            SortKey::DeliveryTimeAsc => "Delivery Time (Fastest)",
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown sort key '{}'", s))
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingPage<T> {
    /// Entries on the requested page, in sort order
    pub items: Vec<T>,

    /// Number of pages after filtering (0 when nothing matched)
    pub total_pages: usize,
}

/// Paginated view with metadata for the pagination control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let limit = limit.max(1);
        let page = page.max(1);
        let total_pages = total_pages(total, limit);
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }

    /// Whether the pagination control should be rendered at all
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }
}

/// `ceil(total / limit)`, 0 for an empty result
pub fn total_pages(total: usize, limit: usize) -> usize {
    if total == 0 { 0 } else { total.div_ceil(limit.max(1)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_defaults() {
        let criteria = FilterCriteria::default();
        assert!(criteria.search.is_empty());
        assert!(criteria.category.is_none());
        assert_eq!(criteria.min_rating, Rating::MIN);
        assert_eq!(criteria.price_range, PriceRange::new(PriceTier::Budget, PriceTier::Premium));
        assert!(!criteria.favorites_only);
    }

    #[test]
    fn test_price_range_inclusive() {
        let range = PriceRange::new(PriceTier::Moderate, PriceTier::Premium);
        assert!(!range.contains(PriceTier::Budget));
        assert!(range.contains(PriceTier::Moderate));
        assert!(range.contains(PriceTier::Premium));
        assert_eq!(range.label(), "$$ - $$$");
    }

    #[test]
    fn test_inverted_price_range_matches_nothing() {
        let range = PriceRange::new(PriceTier::Premium, PriceTier::Budget);
        assert!(PriceTier::ALL.iter().all(|tier| !range.contains(*tier)));
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("delivery_time_asc".parse::<SortKey>().unwrap(), SortKey::DeliveryTimeAsc);
        assert!("price_asc".parse::<SortKey>().is_err());
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(1, 8, 12);
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_prev);
        assert!(meta.has_next);
        assert!(meta.is_paginated());

        let last = PaginationMeta::new(2, 8, 12);
        assert!(last.has_prev);
        assert!(!last.has_next);
    }

    #[test]
    fn test_total_pages_zero_when_empty() {
        assert_eq!(total_pages(0, 8), 0);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert!(!PaginationMeta::new(1, 8, 0).is_paginated());
    }
}
