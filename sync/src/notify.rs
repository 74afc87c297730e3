//! User notification channel.
//!
//! The synchronizer raises a notification only when a shipment's status
//! actually changes, and only when the settings toggle allows it. The
//! channel itself is a seam: production logs at info level, tests inject
//! a recording implementation.

/// Sink for user-facing shipment notifications.
pub trait Notifier: Send + Sync {
    /// Deliver one notification.
    fn send(&self, title: &str, body: &str);
}

/// Notifier that emits through the tracing pipeline.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, title: &str, body: &str) {
        tracing::info!(title, body, "shipment notification");
    }
}
