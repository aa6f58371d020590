//! Notification capability for operator-facing failure alerts.

/// A capability that sends a notification message through a channel
/// such as "email" or "slack".
pub trait Notifier: Send + Sync {
    fn notify(&self, channel: &str, message: &str);
}

/// No-op notifier, selected when no real collaborator is configured.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _channel: &str, _message: &str) {}
}
