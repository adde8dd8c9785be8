//! # Storefront
//!
//! The state core of a food-delivery storefront: browsing restaurants and
//! checking out, without any rendering.
//!
//! ## Features
//!
//! - **Listing Engine**: Filter, sort and paginate catalog entries in one pure call
//! - **Multi-Step Checkout**: Address, delivery, payment and review, validated per step
//! - **Typed Form Variants**: Card details and scheduled times only exist when selected
//! - **Effects as Data**: Transitions return toasts and navigation for the caller to perform
//! - **Exact Money**: Prices and totals as two-place decimals
//! - **Configuration-Based**: Page size, default sort and placeholders via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront::prelude::*;
//!
//! let catalog = InMemoryCatalog::seeded()?;
//! let config = StorefrontConfig::default_config();
//!
//! // Italian restaurants, best rated first
//! let listing = config
//!     .listing_state()
//!     .with_category(Some("Italian".to_string()));
//! let page = listing.view(catalog.restaurants());
//!
//! // Checkout
//! let Transition { state, effects } = config.checkout_state().advance();
//! dispatch(&effects, &TracingNotifier, &TracingNavigator);
//! ```

pub mod config;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        cart::{Cart, CartLine, CartTotals, DishOrder},
        entity::{CatalogEntry, DeliveryEstimate, Dish, PriceTier, Rating, Restaurant, Review},
        events::{Notification, NotificationAction, NotificationKind, Transition, UiEffect},
        field::FieldFormat,
        money::Money,
        profile::{OrderSummary, ProfileEditor, ProfileForm, UserProfile},
        query::{
            FilterCriteria, ListingPage, PaginatedResponse, PaginationMeta, PriceRange, SortKey,
        },
    };

    // === Listing ===
    pub use crate::core::listing::{self, ListingState};

    // === Checkout ===
    pub use crate::core::checkout::{
        CardDetails, CheckoutField, CheckoutForm, CheckoutState, CheckoutStep,
        CheckoutSubmission, DeliveryAddress, DeliveryMode, DeliveryTiming, Payment,
        PaymentMethodKind, ReviewSummary, SubmitOutcome,
    };

    // === Validation ===
    pub use crate::core::validation::{FieldErrors, validators};

    // === Errors ===
    pub use crate::core::error::{
        CatalogError, ConfigError, FieldValidationError, StorefrontError, StorefrontResult,
        ValidationError,
    };

    // === Ports ===
    pub use crate::core::service::{
        ImageKind, ImageRef, ImageResolver, Navigator, Notifier, RecordingNavigator,
        RecordingNotifier, TracingNavigator, TracingNotifier, dispatch,
    };

    // === Storage ===
    pub use crate::storage::{Catalog, InMemoryCatalog};

    // === Config ===
    pub use crate::config::{CheckoutConfig, ImageConfig, ListingConfig, StorefrontConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::NaiveDate;
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
