//! In-memory catalog loaded from YAML

use super::Catalog;
use crate::core::cart::{Cart, CartLine};
use crate::core::entity::{Dish, Restaurant};
use crate::core::error::CatalogError;
use crate::core::profile::UserProfile;
use anyhow::Result;
use serde::Deserialize;
use std::collections::HashSet;

/// The catalog compiled into the crate
const SEED: &str = include_str!("../../data/catalog.yaml");

#[derive(Debug, Deserialize)]
struct CatalogSeed {
    restaurants: Vec<Restaurant>,
    #[serde(default)]
    dishes: Vec<Dish>,
    #[serde(default)]
    cart: Vec<SeedCartLine>,
    #[serde(default)]
    profile: UserProfile,
}

#[derive(Debug, Deserialize)]
struct SeedCartLine {
    /// Dish slug
    dish: String,
    quantity: u32,
}

/// Catalog held entirely in memory
///
/// Loading checks every record; a catalog that loads is valid.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    restaurants: Vec<Restaurant>,
    dishes: Vec<Dish>,
    cart: Cart,
    profile: UserProfile,
}

impl InMemoryCatalog {
    /// The embedded seed catalog
    pub fn seeded() -> Result<Self> {
        Self::from_yaml_str(SEED)
    }

    /// Load a catalog from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let seed: CatalogSeed = serde_yaml::from_str(yaml)?;
        let catalog = Self::from_seed(seed)?;
        tracing::info!(
            restaurants = catalog.restaurants.len(),
            dishes = catalog.dishes.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from records already in memory
    pub fn new(restaurants: Vec<Restaurant>, dishes: Vec<Dish>) -> Result<Self> {
        let catalog = Self::from_seed(CatalogSeed {
            restaurants,
            dishes,
            cart: Vec::new(),
            profile: UserProfile::default(),
        })?;
        Ok(catalog)
    }

    fn from_seed(seed: CatalogSeed) -> std::result::Result<Self, CatalogError> {
        ensure_unique(seed.restaurants.iter().map(|r| r.slug.as_str()))?;
        ensure_unique(seed.dishes.iter().map(|d| d.slug.as_str()))?;

        let restaurant_slugs: HashSet<&str> =
            seed.restaurants.iter().map(|r| r.slug.as_str()).collect();
        if let Some(orphan) = seed
            .dishes
            .iter()
            .find(|d| !restaurant_slugs.contains(d.restaurant.as_str()))
        {
            return Err(CatalogError::UnknownRestaurant {
                dish: orphan.slug.clone(),
                restaurant: orphan.restaurant.clone(),
            });
        }

        let lines = seed
            .cart
            .iter()
            .map(|line| {
                seed.dishes
                    .iter()
                    .find(|d| d.slug == line.dish)
                    .map(|dish| CartLine::for_dish(dish, line.quantity))
                    .ok_or_else(|| CatalogError::UnknownDish {
                        slug: line.dish.clone(),
                    })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            restaurants: seed.restaurants,
            dishes: seed.dishes,
            cart: Cart::from_lines(lines),
            profile: seed.profile,
        })
    }

    /// The cart the shopper starts with
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

fn ensure_unique<'a>(slugs: impl Iterator<Item = &'a str>) -> std::result::Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(CatalogError::DuplicateSlug {
                slug: slug.to_string(),
            });
        }
    }
    Ok(())
}

impl Catalog for InMemoryCatalog {
    fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    fn profile(&self) -> &UserProfile {
        &self.profile
    }
}
