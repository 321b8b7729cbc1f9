//! Upstream fetch: retrieve the raw image list from the remote source.
//!
//! The list is fetched fresh for every request — the service deliberately
//! keeps no cache, so edits to the remote document are visible on the next
//! page load. One attempt, no retry: a failed fetch short-circuits the whole
//! pipeline and surfaces as the error payload on this one response.

use crate::error::GalleryError;
use std::time::Duration;
use tracing::{debug, info};

/// Fetch the raw CRLF-separated image list as text.
///
/// Distinguishes three failure modes so operators can tell a dead source
/// from a slow one: transport errors, timeouts, and non-success statuses.
pub async fn fetch_image_list(url: &str, timeout_secs: u64) -> Result<String, GalleryError> {
    debug!("Fetching image list from: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| GalleryError::UpstreamFetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            GalleryError::UpstreamTimeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            GalleryError::UpstreamFetch {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    if !response.status().is_success() {
        return Err(GalleryError::UpstreamStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| GalleryError::UpstreamFetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    info!("Fetched image list: {} bytes", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Port 1 is reserved and never bound; the connection is refused
    // immediately, which makes this deterministic and offline-safe.
    #[tokio::test]
    async fn unreachable_source_is_a_fetch_error() {
        let result = fetch_image_list("http://127.0.0.1:1/list", 5).await;
        match result {
            Err(GalleryError::UpstreamFetch { url, .. }) => {
                assert_eq!(url, "http://127.0.0.1:1/list");
            }
            other => panic!("expected UpstreamFetch, got {other:?}"),
        }
    }
}
