//! User notification port.

/// Port for surfacing transient, user-visible error notifications.
///
/// Implementations must not block: a notification is a fire-and-forget
/// toast, never part of the request's control flow.
pub trait Notifier: Send + Sync {
    /// Shows a transient error message to the seller.
    fn notify_error(&self, message: &str);
}
