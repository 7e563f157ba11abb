// User-facing failure reporting seam. The browser original called a blocking
// `alert`; front ends supply whatever surface fits (dialog, toast, log).

/// Receives user-facing connection-failure reports from the client.
///
/// Reports are delivered synchronously from the failing call, one per
/// failure. Rapid repeated failures produce repeated reports; nothing is
/// queued or deduplicated here.
pub trait NotificationSink: Send + Sync {
    /// Reports one user-facing failure message.
    fn notify(&self, message: &str);
}

/// Sink that routes reports to the `tracing` error stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, message: &str) {
        tracing::error!(%message, "server request failed");
    }
}

/// Sink that drops every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _message: &str) {}
}
