//! Catalog storage

pub mod in_memory;

pub use in_memory::InMemoryCatalog;

use crate::core::entity::{Dish, Restaurant};
use crate::core::profile::UserProfile;

/// Read access to restaurants, their menus and the shopper's account
pub trait Catalog {
    /// Every restaurant, in seed order
    fn restaurants(&self) -> &[Restaurant];

    /// Every dish across all restaurants, in seed order
    fn dishes(&self) -> &[Dish];

    fn profile(&self) -> &UserProfile;

    fn find_restaurant(&self, slug: &str) -> Option<&Restaurant> {
        self.restaurants().iter().find(|r| r.slug == slug)
    }

    fn find_dish(&self, slug: &str) -> Option<&Dish> {
        self.dishes().iter().find(|d| d.slug == slug)
    }

    /// Dishes served by one restaurant
    fn menu(&self, restaurant_slug: &str) -> Vec<&Dish> {
        self.dishes()
            .iter()
            .filter(|d| d.restaurant == restaurant_slug)
            .collect()
    }

    /// Distinct cuisines, sorted
    fn cuisines(&self) -> Vec<&str> {
        let mut cuisines: Vec<&str> = self.restaurants().iter().map(|r| r.cuisine.as_str()).collect();
        cuisines.sort_unstable();
        cuisines.dedup();
        cuisines
    }
}
