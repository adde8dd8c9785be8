//! Core module containing the storefront's domain types and state machines

pub mod cart;
pub mod checkout;
pub mod entity;
pub mod error;
pub mod events;
pub mod field;
pub mod listing;
pub mod money;
pub mod profile;
pub mod query;
pub mod service;
pub mod validation;

pub use cart::{Cart, CartLine, CartTotals, DishOrder};
pub use checkout::{CheckoutState, CheckoutStep, CheckoutSubmission, SubmitOutcome};
pub use entity::{CatalogEntry, DeliveryEstimate, Dish, PriceTier, Rating, Restaurant, Review};
pub use error::{StorefrontError, StorefrontResult};
pub use events::{Notification, NotificationAction, NotificationKind, Transition, UiEffect};
pub use field::FieldFormat;
pub use listing::ListingState;
pub use money::Money;
pub use profile::{ProfileEditor, ProfileForm, UserProfile};
pub use query::{FilterCriteria, ListingPage, PaginatedResponse, PaginationMeta, PriceRange, SortKey};
pub use service::{
    ImageKind, ImageRef, ImageResolver, Navigator, Notifier, RecordingNavigator, RecordingNotifier,
    TracingNavigator, TracingNotifier, dispatch,
};
pub use validation::FieldErrors;
