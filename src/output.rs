//! Wire types for the images API.
//!
//! The shapes here are the contract with the browser-side renderer and must
//! stay stable: `PageResult` on success, `ErrorPayload` when the upstream
//! fetch (or a page lookup) fails. Both are always delivered with HTTP 200 —
//! the payload, not the status line, carries the failure signal.

use serde::{Deserialize, Serialize};

/// One page of the image list, as returned by `GET /api/v1/images`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Zero-based index of the page being returned.
    pub page: usize,

    /// Zero-based index of the final page after filtering and chunking.
    ///
    /// `-1` when the (filtered) list is empty and there are no pages at all;
    /// clients treat that the same as "you are past the end".
    pub last_page: i64,

    /// The URLs of the requested page, in list order. At most `page_size`
    /// entries; fewer on the final page; empty when the list is empty.
    pub image_urls: Vec<String>,

    /// The `[width, height]` filter that produced this page, with `-1`
    /// meaning "unconstrained on this axis". Empty when no filter was given.
    pub filter_dimensions: Vec<i64>,
}

/// Failure payload: upstream fetch problems and out-of-range page requests
/// are reported through this shape instead of a `PageResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_result_serialises_expected_fields() {
        let result = PageResult {
            page: 1,
            last_page: 3,
            image_urls: vec!["a/100/50".into(), "b/200/75".into()],
            filter_dimensions: vec![],
        };
        let json = serde_json::to_value(&result).expect("serialises");
        assert_eq!(json["page"], 1);
        assert_eq!(json["last_page"], 3);
        assert_eq!(json["image_urls"][0], "a/100/50");
        assert!(json["filter_dimensions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn error_payload_shape() {
        let payload = ErrorPayload {
            error: "connection refused".into(),
        };
        let json = serde_json::to_string(&payload).expect("serialises");
        assert_eq!(json, r#"{"error":"connection refused"}"#);
    }
}
