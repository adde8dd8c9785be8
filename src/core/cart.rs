//! Shopping cart and the dish customisation form that feeds it

use crate::core::entity::Dish;
use crate::core::error::{StorefrontResult, ValidationError};
use crate::core::events::{Notification, NotificationAction, Transition, UiEffect};
use crate::core::money::Money;
use crate::core::validation::FieldErrors;
use crate::core::validation::validators::one_of;
use serde::{Deserialize, Serialize};

/// Path of the cart page
pub const CART_PATH: &str = "/cart";
pub const VIEW_CART_LABEL: &str = "View Cart";

/// One dish in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Id of the dish; lines are keyed by it
    pub id: String,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl CartLine {
    pub fn for_dish(dish: &Dish, quantity: u32) -> Self {
        Self {
            id: dish.id.clone(),
            name: dish.name.clone(),
            price: dish.price,
            quantity: quantity.max(1),
            image_url: dish.image_url.clone(),
            slug: Some(dish.slug.clone()),
        }
    }

    pub fn total(&self) -> Money {
        self.price * self.quantity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub shipping: Money,
    pub taxes: Money,
    pub total: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        lines.into_iter().fold(Self::new(), Cart::add)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add a line, merging quantities with an existing line for the same dish
    pub fn add(mut self, line: CartLine) -> Self {
        match self.lines.iter_mut().find(|existing| existing.id == line.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(line.quantity.max(1))
            }
            None => self.lines.push(CartLine {
                quantity: line.quantity.max(1),
                ..line
            }),
        }
        self
    }

    /// Step a line's quantity by `delta`; it never drops below one.
    /// Unknown ids leave the cart unchanged.
    pub fn change_quantity(mut self, id: &str, delta: i32) -> Self {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = line.quantity.saturating_add_signed(delta).max(1);
            tracing::debug!(id, quantity = line.quantity, "cart quantity changed");
        }
        self
    }

    pub fn remove(mut self, id: &str) -> Self {
        self.lines.retain(|line| line.id != id);
        self
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Shipping and taxes are not charged yet
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let shipping = Money::ZERO;
        let taxes = Money::ZERO;
        CartTotals {
            subtotal,
            shipping,
            taxes,
            total: subtotal + shipping + taxes,
        }
    }
}

// =============================================================================
// Dish order form
// =============================================================================

/// Customisation chosen on the dish page before adding it to the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishOrder {
    quantity: u32,
    pub size: String,
    pub spice_level: String,
    #[serde(default)]
    pub special_instructions: String,
}

impl DishOrder {
    /// Quantity one, the first size and the middle spice level
    pub fn for_dish(dish: &Dish) -> Self {
        let middle = dish.spice_levels.len() / 2;
        Self {
            quantity: 1,
            size: dish.sizes.first().cloned().unwrap_or_default(),
            spice_level: dish.spice_levels.get(middle).cloned().unwrap_or_default(),
            special_instructions: String::new(),
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn change_quantity(mut self, delta: i32) -> Self {
        self.quantity = self.quantity.saturating_add_signed(delta).max(1);
        self
    }

    /// Chosen options must be among the dish's; dishes without options accept anything
    pub fn validate(&self, dish: &Dish) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !dish.sizes.is_empty() {
            errors.check("size", &self.size, one_of(dish.sizes.clone()));
        }
        if !dish.spice_levels.is_empty() {
            errors.check("spiceLevel", &self.spice_level, one_of(dish.spice_levels.clone()));
        }
        errors
    }

    /// Add the customised dish to `cart`
    pub fn add_to_cart(&self, dish: &Dish, cart: Cart) -> StorefrontResult<Transition<Cart>> {
        let errors = self.validate(dish);
        if !errors.is_empty() {
            return Err(ValidationError::from(errors).into());
        }

        tracing::info!(dish = %dish.slug, quantity = self.quantity, "added to cart");
        let notification = Notification::success(
            format!("{} added to your cart!", dish.name),
            format!(
                "Quantity: {}, Size: {}, Spice: {}",
                self.quantity, self.size, self.spice_level
            ),
        )
        .with_action(NotificationAction::new(VIEW_CART_LABEL, CART_PATH));
        let cart = cart.add(CartLine::for_dish(dish, self.quantity));
        Ok(Transition::quiet(cart).with_effect(UiEffect::Notify(notification)))
    }
}
