//! Event notifications for an embedding application.
//!
//! The client never depends on a presentation layer. Instead it reports API
//! errors, transport failures and finished HTML downloads to a single
//! [`DartObserver`], which a UI can implement to show warnings or open files.

use std::path::Path;

/// Receives client events. Every method has an empty default body.
pub trait DartObserver: Send + Sync {
    /// The service answered with a non-success status.
    fn on_api_error(&self, _status: i32, _message: &str) {}

    /// A request failed before a response was received.
    fn on_request_error(&self, _url: &str, _error: &str) {}

    /// A rendered HTML document is available at `path`.
    fn on_html_download_done(&self, _receipt_no: &str, _path: &Path) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DartObserver for NoopObserver {}
