//! Catalog records and the trait the listing engine works against

use crate::core::error::CatalogError;
use crate::core::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A record that can be listed, filtered and sorted.
///
/// The listing engine only sees entries through this trait, so any catalog
/// type (restaurants today) can be paged the same way. Implementors must be
/// fully validated: the engine treats every accessor as infallible.
pub trait CatalogEntry {
    /// Display name, matched by free-text search and used for name ordering
    fn name(&self) -> &str;

    /// Category label compared by exact equality
    fn category(&self) -> &str;

    fn rating(&self) -> Rating;

    fn price_tier(&self) -> PriceTier;

    fn delivery_estimate(&self) -> &DeliveryEstimate;

    fn is_favorite(&self) -> bool;
}

// =============================================================================
// Value types
// =============================================================================

/// A star rating between 0.0 and 5.0 with one decimal, stored in tenths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(0);
    pub const MAX: Rating = Rating(50);

    /// Build a rating from a decimal value, rounding to one decimal
    pub fn new(value: f64) -> Result<Self, CatalogError> {
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(CatalogError::RatingOutOfRange { value });
        }
        Ok(Self((value * 10.0).round() as u8))
    }

    /// Whole-star threshold as picked in the listing filters (0 = any)
    pub fn stars(stars: u8) -> Result<Self, CatalogError> {
        Self::new(f64::from(stars))
    }

    pub const fn tenths(self) -> u8 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = CatalogError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Ordinal price tier, shown as `$`, `$$` or `$$$`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PriceTier {
    Budget = 1,
    Moderate = 2,
    Premium = 3,
}

impl PriceTier {
    pub const ALL: [PriceTier; 3] = [PriceTier::Budget, PriceTier::Moderate, PriceTier::Premium];

    pub fn label(self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Premium => "$$$",
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PriceTier {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PriceTier::Budget),
            2 => Ok(PriceTier::Moderate),
            3 => Ok(PriceTier::Premium),
            _ => Err(CatalogError::PriceTierOutOfRange { value }),
        }
    }
}

impl From<PriceTier> for u8 {
    fn from(tier: PriceTier) -> Self {
        tier.ordinal()
    }
}

/// Free-text delivery estimate such as `"30-40 min"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryEstimate(String);

impl DeliveryEstimate {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading integer token of the estimate, if any.
    ///
    /// Leading whitespace and a `+` sign are skipped; `"30-40 min"` yields 30,
    /// `"about 30 min"` yields `None`.
    pub fn leading_minutes(&self) -> Option<u32> {
        let text = self.0.trim_start();
        let text = text.strip_prefix('+').unwrap_or(text);
        let end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        match &text[..end] {
            "" => None,
            digits => Some(digits.parse().unwrap_or(u32::MAX)),
        }
    }
}

impl fmt::Display for DeliveryEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Records
// =============================================================================

/// A customer review shown on the restaurant detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: Rating,
    pub comment: String,
    pub date: NaiveDate,
}

/// A restaurant as listed and shown in detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub cuisine: String,
    pub rating: Rating,
    pub price_tier: PriceTier,
    pub delivery_time: DeliveryEstimate,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Restaurant {
    /// Whole stars to light up in the rating widget
    pub fn filled_stars(&self) -> u8 {
        (self.rating.tenths() + 5) / 10
    }
}

impl CatalogEntry for Restaurant {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.cuisine
    }

    fn rating(&self) -> Rating {
        self.rating
    }

    fn price_tier(&self) -> PriceTier {
        self.price_tier
    }

    fn delivery_estimate(&self) -> &DeliveryEstimate {
        &self.delivery_time
    }

    fn is_favorite(&self) -> bool {
        self.favorite
    }
}

/// A menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub slug: String,
    /// Slug of the restaurant serving this dish
    pub restaurant: String,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub spice_levels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(4.5).unwrap().tenths(), 45);
        assert_eq!(Rating::new(5.0).unwrap(), Rating::MAX);
        assert!(Rating::new(5.1).is_err());
        assert!(Rating::new(-0.1).is_err());
        assert!(Rating::new(f64::NAN).is_err());
    }

    #[test]
    fn test_rating_rounds_to_one_decimal() {
        assert_eq!(Rating::new(4.26).unwrap().tenths(), 43);
        assert_eq!(Rating::new(4.26).unwrap().to_string(), "4.3");
    }

    #[test]
    fn test_rating_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("4.8").is_ok());
        assert!(serde_json::from_str::<Rating>("9.0").is_err());
    }

    #[test]
    fn test_price_tier_from_ordinal() {
        assert_eq!(PriceTier::try_from(2).unwrap(), PriceTier::Moderate);
        assert_eq!(PriceTier::Premium.label(), "$$$");
        assert!(matches!(
            PriceTier::try_from(4),
            Err(CatalogError::PriceTierOutOfRange { value: 4 })
        ));
    }

    #[test]
    fn test_leading_minutes() {
        assert_eq!(DeliveryEstimate::new("30-40 min").leading_minutes(), Some(30));
        assert_eq!(DeliveryEstimate::new("  25 min").leading_minutes(), Some(25));
        assert_eq!(DeliveryEstimate::new("+15").leading_minutes(), Some(15));
        assert_eq!(DeliveryEstimate::new("about 30").leading_minutes(), None);
        assert_eq!(DeliveryEstimate::new("").leading_minutes(), None);
    }

    #[test]
    fn test_filled_stars_rounds_half_up() {
        let yaml = r#"
id: "1"
slug: eden
name: Eden
cuisine: Fusion
rating: 4.5
price_tier: 2
delivery_time: 30-40 min
"#;
        let restaurant: Restaurant = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(restaurant.filled_stars(), 5);
        assert!(!restaurant.favorite);
        assert!(restaurant.reviews.is_empty());
    }
}
