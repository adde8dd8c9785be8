//! Port traits for the collaborators the storefront core calls out to
//!
//! Presentation concerns (toasts, routing, images) live behind these traits.
//! The core stays agnostic of how they are rendered.

use crate::core::events::{Notification, NotificationKind, UiEffect};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Presents toast notifications
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Moves the application to another path
pub trait Navigator {
    fn go_to(&self, path: &str);

    /// Scroll the current view back to the top
    fn scroll_to_top(&self) {}
}

/// What an image is for, which decides its fallback placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    Restaurant,
    Dish,
}

/// A displayable image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    /// True when `url` is the placeholder rather than the entity's own image
    pub placeholder: bool,
}

/// Resolves an optional image URL into something displayable
pub trait ImageResolver {
    fn resolve(&self, url: Option<&str>, kind: ImageKind) -> ImageRef;
}

/// Hand effects to the ports, in order
pub fn dispatch<N, V>(effects: &[UiEffect], notifier: &N, navigator: &V)
where
    N: Notifier + ?Sized,
    V: Navigator + ?Sized,
{
    for effect in effects {
        match effect {
            UiEffect::Notify(notification) => notifier.notify(notification),
            UiEffect::Navigate { path } => navigator.go_to(path),
            UiEffect::ScrollToTop => navigator.scroll_to_top(),
        }
    }
}

/// Notifier that writes every toast to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        let title = notification.title.as_str();
        let body = notification.body.as_deref().unwrap_or_default();
        let action = notification
            .action
            .as_ref()
            .map(|a| a.path.as_str())
            .unwrap_or_default();
        match notification.kind {
            NotificationKind::Success => tracing::info!(title, body, action, "notification"),
            NotificationKind::Error => tracing::warn!(title, body, action, "notification"),
        }
    }
}

/// Navigator that only logs route changes
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn go_to(&self, path: &str) {
        tracing::info!(path, "navigate");
    }

    fn scroll_to_top(&self) {
        tracing::debug!("scroll to top");
    }
}

/// Notifier that keeps every toast it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.received.borrow_mut().push(notification.clone());
    }
}

/// Navigator that keeps the visited paths and counts scroll resets
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
    scrolls: RefCell<usize>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn scrolls(&self) -> usize {
        *self.scrolls.borrow()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }

    fn scroll_to_top(&self) {
        *self.scrolls.borrow_mut() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_in_order() {
        let notifier = RecordingNotifier::new();
        let navigator = RecordingNavigator::new();
        let effects = vec![
            UiEffect::Notify(Notification::success("Order Placed Successfully!", "Thanks")),
            UiEffect::navigate("/"),
            UiEffect::ScrollToTop,
        ];

        dispatch(&effects, &notifier, &navigator);

        let received = notifier.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].body.as_deref(), Some("Thanks"));
        assert_eq!(navigator.visited(), vec!["/".to_string()]);
        assert_eq!(navigator.scrolls(), 1);
    }

    #[test]
    fn test_dispatch_to_trait_objects() {
        let notifier: Box<dyn Notifier> = Box::new(TracingNotifier);
        let navigator: Box<dyn Navigator> = Box::new(TracingNavigator);
        dispatch(
            &[UiEffect::Notify(Notification::error("oops"))],
            notifier.as_ref(),
            navigator.as_ref(),
        );
    }
}
