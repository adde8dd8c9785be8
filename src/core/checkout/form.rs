//! Checkout form values
//!
//! Conditional fields are variants rather than optional fields: card details
//! only exist while paying by card and a scheduled time only exists for a
//! scheduled delivery.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

pub const DEFAULT_COUNTRY: &str = "USA";

/// Input format of the scheduled-time picker
pub const SCHEDULED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Public names of every checkout field, as used in error maps and payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    StreetAddress,
    City,
    State,
    ZipCode,
    Country,
    DeliveryTimeOption,
    ScheduledTime,
    PaymentMethod,
    CardHolderName,
    CardNumber,
    CardExpiry,
    CardCvc,
}

impl CheckoutField {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckoutField::StreetAddress => "streetAddress",
            CheckoutField::City => "city",
            CheckoutField::State => "state",
            CheckoutField::ZipCode => "zipCode",
            CheckoutField::Country => "country",
            CheckoutField::DeliveryTimeOption => "deliveryTimeOption",
            CheckoutField::ScheduledTime => "scheduledTime",
            CheckoutField::PaymentMethod => "paymentMethod",
            CheckoutField::CardHolderName => "cardHolderName",
            CheckoutField::CardNumber => "cardNumber",
            CheckoutField::CardExpiry => "cardExpiry",
            CheckoutField::CardCvc => "cardCvc",
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Address
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DeliveryAddress {
    #[serde(rename = "streetAddress")]
    #[validate(length(min = 5, message = "Street address is required (min 5 chars)"))]
    pub street: String,

    #[validate(length(min = 2, message = "City is required (min 2 chars)"))]
    pub city: String,

    #[validate(length(min = 2, message = "State/Province is required (min 2 chars)"))]
    pub state: String,

    #[serde(rename = "zipCode")]
    pub zip: String,

    #[validate(length(min = 2, message = "Country is required"))]
    pub country: String,
}

impl Default for DeliveryAddress {
    fn default() -> Self {
        Self {
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl fmt::Display for DeliveryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip, self.country
        )
    }
}

// =============================================================================
// Delivery timing
// =============================================================================

/// Which delivery option is selected, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    Immediate,
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "deliveryTimeOption")]
pub enum DeliveryTiming {
    #[default]
    #[serde(rename = "asap")]
    Immediate,
    #[serde(rename = "scheduled")]
    Scheduled {
        #[serde(rename = "scheduledTime")]
        at: String,
    },
}

impl DeliveryTiming {
    pub fn mode(&self) -> DeliveryMode {
        match self {
            DeliveryTiming::Immediate => DeliveryMode::Immediate,
            DeliveryTiming::Scheduled { .. } => DeliveryMode::Scheduled,
        }
    }

    /// Empty timing for `mode`
    pub fn for_mode(mode: DeliveryMode) -> Self {
        match mode {
            DeliveryMode::Immediate => DeliveryTiming::Immediate,
            DeliveryMode::Scheduled => DeliveryTiming::Scheduled { at: String::new() },
        }
    }

    /// Review line, e.g. `"Scheduled for: Oct 20, 2026 6:30 PM"`
    pub fn summary(&self) -> String {
        match self {
            DeliveryTiming::Immediate => "As Soon As Possible".to_string(),
            DeliveryTiming::Scheduled { at } => {
                match NaiveDateTime::parse_from_str(at, SCHEDULED_TIME_FORMAT) {
                    Ok(when) => format!("Scheduled for: {}", when.format("%b %-d, %Y %-I:%M %p")),
                    Err(_) => format!("Scheduled for: {}", at),
                }
            }
        }
    }
}

// =============================================================================
// Payment
// =============================================================================

/// Which payment method is selected, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    Card,
    PayPal,
    GPay,
}

impl PaymentMethodKind {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethodKind::Card => "Credit Card",
            PaymentMethodKind::PayPal => "PayPal",
            PaymentMethodKind::GPay => "Google Pay",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct CardDetails {
    #[serde(rename = "cardHolderName")]
    #[validate(length(min = 2, message = "Card holder name is required."))]
    pub holder: String,

    #[serde(rename = "cardNumber")]
    pub number: String,

    #[serde(rename = "cardExpiry")]
    pub expiry: String,

    #[serde(rename = "cardCvc")]
    pub cvc: String,
}

impl CardDetails {
    /// Card number with all but the last four digits hidden
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.number.chars().collect();
        let visible = digits.len().saturating_sub(4);
        digits[visible..].iter().fold("**** **** **** ".to_string(), |mut s, c| {
            s.push(*c);
            s
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "paymentMethod")]
pub enum Payment {
    #[serde(rename = "creditCard")]
    Card(CardDetails),
    #[serde(rename = "paypal")]
    PayPal,
    #[serde(rename = "gpay")]
    GPay,
}

impl Default for Payment {
    fn default() -> Self {
        Payment::Card(CardDetails::default())
    }
}

impl Payment {
    pub fn kind(&self) -> PaymentMethodKind {
        match self {
            Payment::Card(_) => PaymentMethodKind::Card,
            Payment::PayPal => PaymentMethodKind::PayPal,
            Payment::GPay => PaymentMethodKind::GPay,
        }
    }

    /// Empty payment for `kind`
    pub fn for_kind(kind: PaymentMethodKind) -> Self {
        match kind {
            PaymentMethodKind::Card => Payment::Card(CardDetails::default()),
            PaymentMethodKind::PayPal => Payment::PayPal,
            PaymentMethodKind::GPay => Payment::GPay,
        }
    }

    pub fn card(&self) -> Option<&CardDetails> {
        match self {
            Payment::Card(card) => Some(card),
            _ => None,
        }
    }

    /// Hint shown under the method picker
    pub fn instructions(&self) -> Option<&'static str> {
        match self {
            Payment::Card(_) => None,
            Payment::PayPal => Some("You will be redirected to PayPal to complete your payment."),
            Payment::GPay => Some("Follow instructions from Google Pay to complete your payment."),
        }
    }
}

// =============================================================================
// Whole form
// =============================================================================

/// Every value the checkout collects
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    #[serde(flatten)]
    pub address: DeliveryAddress,

    #[serde(flatten)]
    pub delivery: DeliveryTiming,

    #[serde(flatten)]
    pub payment: Payment,
}

impl CheckoutForm {
    /// Initial values with a pre-selected country
    pub fn with_country(country: impl Into<String>) -> Self {
        Self {
            address: DeliveryAddress {
                country: country.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Switch delivery option; keeps existing data if the mode is unchanged
    pub fn set_delivery_mode(&mut self, mode: DeliveryMode) {
        if self.delivery.mode() != mode {
            self.delivery = DeliveryTiming::for_mode(mode);
        }
    }

    /// Switch payment method; keeps existing card details if already paying by card
    pub fn set_payment_method(&mut self, kind: PaymentMethodKind) {
        if self.payment.kind() != kind {
            self.payment = Payment::for_kind(kind);
        }
    }

    /// Lines shown on the review step
    pub fn review(&self) -> ReviewSummary {
        let payment = match &self.payment {
            Payment::Card(card) => format!("{} {}", PaymentMethodKind::Card.label(), card.masked_number()),
            other => other.kind().label().to_string(),
        };

        ReviewSummary {
            address: self.address.to_string(),
            delivery: self.delivery.summary(),
            payment,
        }
    }
}

/// Read-only summary for the "Review & Confirm" step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub address: String,
    pub delivery: String,
    pub payment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_form() {
        let form = CheckoutForm::default();
        assert_eq!(form.address.country, "USA");
        assert_eq!(form.delivery, DeliveryTiming::Immediate);
        assert_eq!(form.payment.kind(), PaymentMethodKind::Card);
    }

    #[test]
    fn test_payload_uses_form_field_names() {
        let form = CheckoutForm {
            address: DeliveryAddress {
                street: "123 Main St".to_string(),
                city: "Anytown".to_string(),
                state: "CA".to_string(),
                zip: "90210".to_string(),
                country: "USA".to_string(),
            },
            delivery: DeliveryTiming::Scheduled {
                at: "2026-10-20T18:30".to_string(),
            },
            payment: Payment::PayPal,
        };

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["streetAddress"], json!("123 Main St"));
        assert_eq!(value["zipCode"], json!("90210"));
        assert_eq!(value["deliveryTimeOption"], json!("scheduled"));
        assert_eq!(value["scheduledTime"], json!("2026-10-20T18:30"));
        assert_eq!(value["paymentMethod"], json!("paypal"));
        assert!(value.get("cardNumber").is_none());

        let back: CheckoutForm = serde_json::from_value(value).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn test_switching_payment_method_drops_card_details() {
        let mut form = CheckoutForm::default();
        if let Payment::Card(card) = &mut form.payment {
            card.number = "4242424242424242".to_string();
        }

        form.set_payment_method(PaymentMethodKind::Card);
        assert_eq!(form.payment.card().unwrap().number, "4242424242424242");

        form.set_payment_method(PaymentMethodKind::GPay);
        form.set_payment_method(PaymentMethodKind::Card);
        assert!(form.payment.card().unwrap().number.is_empty());
    }

    #[test]
    fn test_scheduled_summary_formats_picker_value() {
        let timing = DeliveryTiming::Scheduled {
            at: "2026-10-20T18:30".to_string(),
        };
        assert_eq!(timing.summary(), "Scheduled for: Oct 20, 2026 6:30 PM");

        let raw = DeliveryTiming::Scheduled {
            at: "tonight".to_string(),
        };
        assert_eq!(raw.summary(), "Scheduled for: tonight");
    }

    #[test]
    fn test_review_masks_card_number() {
        let mut form = CheckoutForm::default();
        form.payment = Payment::Card(CardDetails {
            holder: "Jane Doe".to_string(),
            number: "4242424242421234".to_string(),
            expiry: "12/29".to_string(),
            cvc: "123".to_string(),
        });
        let review = form.review();
        assert_eq!(review.payment, "Credit Card **** **** **** 1234");
        assert_eq!(review.delivery, "As Soon As Possible");
    }
}
