//! User-visible side effects produced by state transitions
//!
//! Operations never talk to the outside world directly. They return the
//! effects they want performed as plain data alongside the new state, and the
//! caller hands them to the ports in [`crate::core::service`].
//!
//! ```text
//! CheckoutState::advance() ──▶ Transition { state, effects } ──▶ dispatch() ──▶ Notifier
//!                                                                           └─▶ Navigator
//! ```

use serde::{Deserialize, Serialize};

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<NotificationAction>,
}

/// A button on a toast that takes the user somewhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub label: String,
    pub path: String,
}

impl NotificationAction {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// The navigation this action performs when clicked
    pub fn effect(&self) -> UiEffect {
        UiEffect::navigate(self.path.clone())
    }
}

impl Notification {
    /// A toast with a title only
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: None,
            action: None,
        }
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            body: Some(body.into()),
            action: None,
        }
    }

    pub fn with_action(mut self, action: NotificationAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title)
    }
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum UiEffect {
    /// Show a toast
    Notify(Notification),
    /// Navigate to an application path
    Navigate { path: String },
    /// Scroll the viewport back to the top
    ScrollToTop,
}

impl UiEffect {
    pub fn navigate(path: impl Into<String>) -> Self {
        UiEffect::Navigate { path: path.into() }
    }

    pub fn as_notification(&self) -> Option<&Notification> {
        match self {
            UiEffect::Notify(n) => Some(n),
            _ => None,
        }
    }
}

/// Result of a state transition: the new state and the effects to run
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    pub state: S,
    pub effects: Vec<UiEffect>,
}

impl<S> Transition<S> {
    /// A transition with no side effects
    pub fn quiet(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: UiEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.effects.iter().filter_map(UiEffect::as_notification)
    }

    pub fn scrolls_to_top(&self) -> bool {
        self.effects.contains(&UiEffect::ScrollToTop)
    }

    pub fn into_parts(self) -> (S, Vec<UiEffect>) {
        (self.state, self.effects)
    }
}
