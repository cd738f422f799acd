/// Notifier port for transient user notifications
///
/// This port abstracts toasts/snackbars (e.g. stderr in the CLI host) so
/// that use cases can report outcomes without knowing how they are shown.
pub trait Notifier: Send + Sync {
    /// Reports an informational message
    fn info(&self, message: &str);

    /// Reports a non-fatal failure
    fn error(&self, message: &str);

    /// A catalog fetch for `page` has been issued
    fn fetch_started(&self, page: u32);

    /// The most recent catalog fetch has settled
    fn fetch_finished(&self);
}
