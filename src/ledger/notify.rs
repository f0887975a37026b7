//! User-visible notifications (toasts) and navigation side effects.
//!
//! Components report effects through the `Notifier` and `Navigator` seams;
//! page handlers collect them per request with `PageEffects` and render them
//! into that request's response. Messages are rendered as-is, so they must
//! never carry secrets.

use std::sync::Mutex;
use tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: Variant::Destructive,
            ..Self::new(title, description)
        }
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Fire-and-forget notification channel.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Client-side navigation.
pub trait Navigator: Send + Sync {
    /// Navigate to `path`, replacing the current history entry.
    fn replace(&self, path: &str);
}

/// Per-request recorder for notifications and navigation.
#[derive(Debug, Default)]
pub struct PageEffects {
    notifications: Mutex<Vec<Notification>>,
    navigation: Mutex<Option<String>>,
}

impl PageEffects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn navigation(&self) -> Option<String> {
        self.navigation
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Notifier for PageEffects {
    fn notify(&self, notification: Notification) {
        match self.notifications.lock() {
            Ok(mut guard) => guard.push(notification),
            Err(err) => warn!("Dropping notification, recorder poisoned: {err}"),
        }
    }
}

impl Navigator for PageEffects {
    fn replace(&self, path: &str) {
        match self.navigation.lock() {
            Ok(mut guard) => *guard = Some(path.to_string()),
            Err(err) => warn!("Dropping navigation to {path}, recorder poisoned: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_effects_record_in_order() {
        let effects = PageEffects::new();
        assert!(effects.notifications().is_empty());
        assert_eq!(effects.navigation(), None);

        effects.notify(Notification::new("One", "first"));
        effects.notify(Notification::destructive("Two", "second"));
        effects.replace("/auth/login");

        let notifications = effects.notifications();
        assert_eq!(notifications.len(), 2);
        assert!(!notifications[0].is_destructive());
        assert!(notifications[1].is_destructive());
        assert_eq!(effects.navigation().as_deref(), Some("/auth/login"));
    }

    #[test]
    fn last_navigation_wins() {
        let effects = PageEffects::new();
        effects.replace("/a");
        effects.replace("/auth/login");
        assert_eq!(effects.navigation().as_deref(), Some("/auth/login"));
    }
}
