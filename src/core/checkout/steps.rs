//! The checkout step table
//!
//! Each step owns a fixed set of fields and one validator. Only the current
//! step's fields are checked when advancing; submit checks every step.

use super::form::{CheckoutField, CheckoutForm, DeliveryAddress, DeliveryTiming, Payment};
use crate::core::field::FieldFormat;
use crate::core::validation::FieldErrors;
use crate::core::validation::validators::{matches_format, required};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// One screen of the checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Address = 1,
    Delivery = 2,
    Payment = 3,
    Review = 4,
}

/// Static description of a step
#[derive(Debug, Clone, Copy)]
pub struct StepDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [CheckoutField],
    pub validate: fn(&CheckoutForm) -> FieldErrors,
}

const ADDRESS_FIELDS: &[CheckoutField] = &[
    CheckoutField::StreetAddress,
    CheckoutField::City,
    CheckoutField::State,
    CheckoutField::ZipCode,
    CheckoutField::Country,
];

const DELIVERY_FIELDS: &[CheckoutField] = &[
    CheckoutField::DeliveryTimeOption,
    CheckoutField::ScheduledTime,
];

const PAYMENT_FIELDS: &[CheckoutField] = &[
    CheckoutField::PaymentMethod,
    CheckoutField::CardHolderName,
    CheckoutField::CardNumber,
    CheckoutField::CardExpiry,
    CheckoutField::CardCvc,
];

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 4] = [
        CheckoutStep::Address,
        CheckoutStep::Delivery,
        CheckoutStep::Payment,
        CheckoutStep::Review,
    ];

    pub const FIRST: CheckoutStep = CheckoutStep::Address;
    pub const LAST: CheckoutStep = CheckoutStep::Review;

    pub fn descriptor(self) -> StepDescriptor {
        match self {
            CheckoutStep::Address => StepDescriptor {
                title: "Delivery Address",
                description: "Enter your delivery address.",
                fields: ADDRESS_FIELDS,
                validate: |form| validate_address(&form.address),
            },
            CheckoutStep::Delivery => StepDescriptor {
                title: "Delivery Options",
                description: "Choose when you'd like your order.",
                fields: DELIVERY_FIELDS,
                validate: |form| validate_delivery(&form.delivery),
            },
            CheckoutStep::Payment => StepDescriptor {
                title: "Payment",
                description: "Select your preferred payment method.",
                fields: PAYMENT_FIELDS,
                validate: |form| validate_payment(&form.payment),
            },
            CheckoutStep::Review => StepDescriptor {
                title: "Review & Confirm",
                description: "Please review your order details before placing it.",
                fields: &[],
                validate: |_| FieldErrors::new(),
            },
        }
    }

    /// 1-based position
    pub fn number(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        self.descriptor().title
    }

    pub fn fields(self) -> &'static [CheckoutField] {
        self.descriptor().fields
    }

    pub fn field_names(self) -> Vec<&'static str> {
        self.fields().iter().map(|f| f.as_str()).collect()
    }

    pub fn validate(self, form: &CheckoutForm) -> FieldErrors {
        (self.descriptor().validate)(form)
    }

    pub fn next(self) -> Option<CheckoutStep> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn previous(self) -> Option<CheckoutStep> {
        self.number()
            .checked_sub(2)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// =============================================================================
// Step validators
// =============================================================================

pub fn validate_address(address: &DeliveryAddress) -> FieldErrors {
    let checked = address.validate();
    let mut errors = FieldErrors::new();
    errors.extend_from_validator(
        &checked,
        &[
            ("street", CheckoutField::StreetAddress.as_str()),
            ("city", CheckoutField::City.as_str()),
            ("state", CheckoutField::State.as_str()),
        ],
    );
    errors.check(
        CheckoutField::ZipCode.as_str(),
        &address.zip,
        matches_format(
            FieldFormat::ZipCode,
            "Invalid zip code format (e.g., 12345 or 12345-6789)",
        ),
    );
    errors.extend_from_validator(&checked, &[("country", CheckoutField::Country.as_str())]);
    errors
}

pub fn validate_delivery(delivery: &DeliveryTiming) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let DeliveryTiming::Scheduled { at } = delivery {
        errors.check(
            CheckoutField::ScheduledTime.as_str(),
            at,
            required("Please specify a time for scheduled delivery."),
        );
    }
    errors
}

/// Card fields are only checked when paying by card
pub fn validate_payment(payment: &Payment) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let Payment::Card(card) = payment else {
        return errors;
    };

    errors.extend_from_validator(
        &card.validate(),
        &[("holder", CheckoutField::CardHolderName.as_str())],
    );
    errors.check(
        CheckoutField::CardNumber.as_str(),
        &card.number,
        matches_format(FieldFormat::CardNumber, "Valid 16-digit card number is required."),
    );
    errors.check(
        CheckoutField::CardExpiry.as_str(),
        &card.expiry,
        matches_format(FieldFormat::CardExpiry, "Valid expiry date (MM/YY) is required."),
    );
    errors.check(
        CheckoutField::CardCvc.as_str(),
        &card.cvc,
        matches_format(FieldFormat::Cvc, "Valid CVC (3 or 4 digits) is required."),
    );
    errors
}

/// Every step's rules, in step order
pub fn validate_all(form: &CheckoutForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for step in CheckoutStep::ALL {
        errors.merge(step.validate(form));
    }
    errors
}
