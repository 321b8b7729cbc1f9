//! Error types for the photoview library.
//!
//! Two kinds of failure flow through [`GalleryError`]:
//!
//! * **Upstream failures** (`UpstreamFetch`, `UpstreamTimeout`,
//!   `UpstreamStatus`) — the remote image-list source could not be read.
//!   The HTTP layer converts these into a `{"error": ...}` JSON payload with
//!   a 200 status, keeping the transport channel "successful" while the
//!   payload signals failure. That contract predates this implementation and
//!   is preserved as-is.
//!
//! * **Caller contract violations** (`PageOutOfRange`, `InvalidConfig`) —
//!   the request or configuration asked for something that does not exist.
//!   `PageOutOfRange` travels through the same error-payload channel; there
//!   is no 4xx path on the images route beyond the automatic 405.

use thiserror::Error;

/// All errors returned by the photoview library.
#[derive(Debug, Error)]
pub enum GalleryError {
    // ── Upstream errors ───────────────────────────────────────────────────
    /// The image-list source is unreachable or the transfer failed mid-flight.
    #[error("Failed to fetch image list from '{url}': {reason}")]
    UpstreamFetch { url: String, reason: String },

    /// The fetch exceeded the configured timeout.
    #[error("Fetching image list from '{url}' timed out after {secs}s")]
    UpstreamTimeout { url: String, secs: u64 },

    /// The source answered with a non-success HTTP status.
    #[error("Image list source '{url}' answered HTTP {status}")]
    UpstreamStatus { url: String, status: u16 },

    // ── Request errors ────────────────────────────────────────────────────
    /// The requested page index exceeds the last page of the chunked list.
    ///
    /// Chosen over silent clamping: the original service indexed past the
    /// end of the array and produced a malformed response. See DESIGN.md.
    #[error("Page {page} is out of range (last page is {last_page})")]
    PageOutOfRange { page: usize, last_page: i64 },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_fetch_display() {
        let e = GalleryError::UpstreamFetch {
            url: "https://example.test/list".into(),
            reason: "connection refused".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("https://example.test/list"), "got: {msg}");
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn upstream_timeout_display() {
        let e = GalleryError::UpstreamTimeout {
            url: "https://example.test/list".into(),
            secs: 30,
        };
        assert!(e.to_string().contains("30s"));
    }

    #[test]
    fn page_out_of_range_display() {
        let e = GalleryError::PageOutOfRange {
            page: 9,
            last_page: 2,
        };
        let msg = e.to_string();
        assert!(msg.contains("Page 9"));
        assert!(msg.contains("last page is 2"));
    }
}
