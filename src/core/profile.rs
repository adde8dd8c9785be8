//! Account page: contact details, order history and saved addresses/cards

use crate::core::events::{Notification, NotificationKind, Transition, UiEffect};
use crate::core::money::Money;
use crate::core::validation::FieldErrors;
use crate::core::validation::validators::min_chars;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

pub const PROFILE_SAVED_TITLE: &str = "Profile information saved!";
pub const PROFILE_ERROR_TITLE: &str = "Please correct the errors before saving.";

/// Editable contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    pub phone: String,
}

impl ProfileForm {
    pub fn validate_fields(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.extend_from_validator(&self.validate(), &[("name", "name"), ("email", "email")]);
        errors.check(
            "phone",
            &self.phone,
            min_chars(7, "Phone number must be at least 7 characters."),
        );
        errors
    }

    /// Avatar fallback: the first letter of each word of the name
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// The profile tab: last saved values, the draft being edited and its errors
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEditor {
    saved: ProfileForm,
    draft: ProfileForm,
    errors: FieldErrors,
}

impl ProfileEditor {
    pub fn new(saved: ProfileForm) -> Self {
        Self {
            draft: saved.clone(),
            saved,
            errors: FieldErrors::new(),
        }
    }

    pub fn saved(&self) -> &ProfileForm {
        &self.saved
    }

    pub fn draft(&self) -> &ProfileForm {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn edit(mut self, f: impl FnOnce(&mut ProfileForm)) -> Self {
        f(&mut self.draft);
        self
    }

    /// Validate the draft and keep it as the saved profile if it passes
    pub fn save(mut self) -> Transition<Self> {
        self.errors = self.draft.validate_fields();
        if !self.errors.is_empty() {
            tracing::warn!(errors = self.errors.len(), "profile save rejected");
            return Transition::quiet(self)
                .with_effect(UiEffect::Notify(Notification::error(PROFILE_ERROR_TITLE)));
        }

        tracing::info!(name = %self.draft.name, "profile saved");
        self.saved = self.draft.clone();
        Transition::quiet(self).with_effect(UiEffect::Notify(Notification::new(
            NotificationKind::Success,
            PROFILE_SAVED_TITLE,
        )))
    }
}

// =============================================================================
// Account records
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    Delivered,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// A past order in the history tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: String,
    pub date: NaiveDate,
    pub restaurant_name: String,
    pub total: Money,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAddress {
    pub id: String,
    /// "Home", "Work", ...
    pub label: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPaymentMethod {
    pub id: String,
    /// Card brand, e.g. "Visa"
    pub brand: String,
    pub last4: String,
    pub expiry_date: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Everything shown on the account page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub contact: ProfileForm,
    #[serde(default)]
    pub orders: Vec<OrderSummary>,
    #[serde(default)]
    pub addresses: Vec<SavedAddress>,
    #[serde(default)]
    pub payment_methods: Vec<SavedPaymentMethod>,
}

impl UserProfile {
    pub fn editor(&self) -> ProfileEditor {
        ProfileEditor::new(self.contact.clone())
    }

    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.is_default)
    }

    pub fn default_payment_method(&self) -> Option<&SavedPaymentMethod> {
        self.payment_methods.iter().find(|p| p.is_default)
    }

    /// Order history, newest first
    pub fn recent_orders(&self) -> Vec<&OrderSummary> {
        let mut orders: Vec<&OrderSummary> = self.orders.iter().collect();
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> ProfileForm {
        ProfileForm {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "555-123-4567".to_string(),
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(john().initials(), "JD");
        assert_eq!(initials("  ada   lovelace byron "), "ALB");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_valid_profile_has_no_errors() {
        assert!(john().validate_fields().is_empty());
    }

    #[test]
    fn test_invalid_profile_fields() {
        let form = ProfileForm {
            name: String::new(),
            email: "john.doe".to_string(),
            phone: "555".to_string(),
        };
        let errors = form.validate_fields();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["name", "email", "phone"]);
    }

    #[test]
    fn test_save_success_notifies() {
        let t = ProfileEditor::new(john())
            .edit(|form| form.name = "Jane Doe".to_string())
            .save();
        assert_eq!(t.state.saved().name, "Jane Doe");
        let note = t.notifications().next().unwrap();
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.title, PROFILE_SAVED_TITLE);
    }

    #[test]
    fn test_save_failure_keeps_saved_values() {
        let t = ProfileEditor::new(john())
            .edit(|form| form.email = "nope".to_string())
            .save();
        assert_eq!(t.state.saved(), &john());
        assert_eq!(
            t.state.errors().get("email"),
            Some("Please enter a valid email address.")
        );
        assert_eq!(t.notifications().next().unwrap().kind, NotificationKind::Error);
    }
}
