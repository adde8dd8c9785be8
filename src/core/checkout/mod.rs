//! Multi-step checkout
//!
//! [`CheckoutState`] is a small state machine over [`CheckoutStep`]s. Every
//! transition consumes the state and returns the next one together with the
//! effects the page should perform.
//!
//! ```text
//! Address ──advance──▶ Delivery ──advance──▶ Payment ──advance──▶ Review
//!    ▲                                                             │
//!    └──────────────────────── submit (valid) ─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let state = CheckoutState::default().edit(|form| {
//!     form.address.street = "123 Main St".into();
//!     // ...
//! });
//! let Transition { state, effects } = state.advance();
//! dispatch(&effects, &notifier, &navigator);
//! ```

pub mod form;
pub mod steps;

pub use form::{
    CardDetails, CheckoutField, CheckoutForm, DeliveryAddress, DeliveryMode, DeliveryTiming,
    Payment, PaymentMethodKind, ReviewSummary,
};
pub use steps::{CheckoutStep, StepDescriptor, validate_all};

use crate::core::events::{Notification, Transition, UiEffect};
use crate::core::validation::FieldErrors;
use serde::Serialize;
use uuid::Uuid;

pub const STEP_ERROR_TITLE: &str = "Please correct the errors before proceeding.";
pub const ORDER_PLACED_TITLE: &str = "Order Placed Successfully!";
pub const ORDER_PLACED_BODY: &str =
    "Your delicious meal is on its way. Thank you for your order!";

/// Where the shopper lands after placing an order
pub const AFTER_ORDER_PATH: &str = "/";

/// The checkout page's state: current step, values and inline errors
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutState {
    step: CheckoutStep,
    form: CheckoutForm,
    errors: FieldErrors,
    initial: CheckoutForm,
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self::new(CheckoutForm::default())
    }
}

/// A successfully placed order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSubmission {
    pub order_id: Uuid,
    /// Exactly the validated form values
    #[serde(flatten)]
    pub form: CheckoutForm,
}

/// Result of [`CheckoutState::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Order accepted; the transition carries the reset state
    Placed {
        submission: CheckoutSubmission,
        transition: Transition<CheckoutState>,
    },
    /// Validation failed or submit was attempted before the last step
    Rejected(Transition<CheckoutState>),
}

impl SubmitOutcome {
    pub fn transition(&self) -> &Transition<CheckoutState> {
        match self {
            SubmitOutcome::Placed { transition, .. } | SubmitOutcome::Rejected(transition) => {
                transition
            }
        }
    }

    pub fn into_transition(self) -> Transition<CheckoutState> {
        match self {
            SubmitOutcome::Placed { transition, .. } | SubmitOutcome::Rejected(transition) => {
                transition
            }
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, SubmitOutcome::Placed { .. })
    }
}

impl CheckoutState {
    /// Start at the first step with `initial` values; a successful submit
    /// returns here.
    pub fn new(initial: CheckoutForm) -> Self {
        Self {
            step: CheckoutStep::FIRST,
            form: initial.clone(),
            errors: FieldErrors::new(),
            initial,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Inline error for one field
    pub fn error(&self, field: CheckoutField) -> Option<&str> {
        self.errors.get(field.as_str())
    }

    /// Change form values. No validation runs until the next transition.
    pub fn edit(mut self, f: impl FnOnce(&mut CheckoutForm)) -> Self {
        f(&mut self.form);
        self
    }

    pub fn with_delivery_mode(self, mode: DeliveryMode) -> Self {
        self.edit(|form| form.set_delivery_mode(mode))
    }

    pub fn with_payment_method(self, kind: PaymentMethodKind) -> Self {
        self.edit(|form| form.set_payment_method(kind))
    }

    /// Validate the current step and move forward if it passes
    pub fn advance(mut self) -> Transition<Self> {
        let step_errors = self.step.validate(&self.form);
        self.errors.clear_fields(&self.step.field_names());

        if !step_errors.is_empty() {
            tracing::warn!(
                step = self.step.number(),
                errors = step_errors.len(),
                "checkout step rejected"
            );
            self.errors.merge(step_errors);
            return Transition::quiet(self)
                .with_effect(UiEffect::Notify(Notification::error(STEP_ERROR_TITLE)));
        }

        match self.step.next() {
            Some(next) => {
                tracing::debug!(from = self.step.number(), to = next.number(), "checkout step advanced");
                self.step = next;
                Transition::quiet(self).with_effect(UiEffect::ScrollToTop)
            }
            None => Transition::quiet(self),
        }
    }

    /// Go back one step without validating
    pub fn retreat(mut self) -> Transition<Self> {
        match self.step.previous() {
            Some(previous) => {
                tracing::debug!(from = self.step.number(), to = previous.number(), "checkout step retreated");
                self.step = previous;
                Transition::quiet(self).with_effect(UiEffect::ScrollToTop)
            }
            None => Transition::quiet(self),
        }
    }

    /// Re-validate the whole form and place the order.
    ///
    /// Only allowed from the last step. On success the state is reset to its
    /// initial values.
    pub fn submit(mut self) -> SubmitOutcome {
        if !self.step.is_last() {
            tracing::debug!(step = self.step.number(), "submit before review ignored");
            return SubmitOutcome::Rejected(Transition::quiet(self));
        }

        let errors = validate_all(&self.form);
        if !errors.is_empty() {
            tracing::warn!(errors = errors.len(), "checkout submission rejected");
            self.errors = errors;
            return SubmitOutcome::Rejected(
                Transition::quiet(self)
                    .with_effect(UiEffect::Notify(Notification::error(STEP_ERROR_TITLE))),
            );
        }

        let submission = CheckoutSubmission {
            order_id: Uuid::new_v4(),
            form: self.form,
        };
        tracing::info!(order_id = %submission.order_id, payment = ?submission.form.payment.kind(), "order placed");

        let transition = Transition::quiet(Self::new(self.initial))
            .with_effect(UiEffect::Notify(Notification::success(
                ORDER_PLACED_TITLE,
                ORDER_PLACED_BODY,
            )))
            .with_effect(UiEffect::navigate(AFTER_ORDER_PATH));

        SubmitOutcome::Placed {
            submission,
            transition,
        }
    }

    /// Summary for the review step
    pub fn review(&self) -> ReviewSummary {
        self.form.review()
    }
}
