//! HTTP surface: the images route and the server runner.
//!
//! One route — `GET /api/v1/images` — over a shared [`GalleryConfig`].
//! Query parameters are normalised here, at the edge, and handed to the
//! pipeline as an explicit [`PageRequest`]; nothing below this module reads
//! request state. Malformed parameters are silently defaulted rather than
//! rejected (there is no 400 path on this route), and both pipeline
//! failures and upstream failures answer 200 with an `{"error": ...}`
//! payload — the browser client switches on the payload shape, not the
//! status line.
//!
//! Axum supplies the rest of the surface for free: a non-GET method on the
//! route is a 405 with an empty body, an unmatched path a 404.

use crate::config::GalleryConfig;
use crate::images::{fetch_page, PageRequest};
use crate::output::ErrorPayload;
use crate::pipeline::filter::FilterDimensions;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Raw query parameters, exactly as sent. Normalisation happens in
/// [`normalize_request`] so its rules are testable without a socket.
#[derive(Debug, Default, Deserialize)]
pub struct RawImagesQuery {
    /// Zero-based page index; non-digit values are ignored.
    pub paged: Option<String>,
    /// The literal `"true"` enables toggling; anything else is absent.
    #[serde(rename = "toggle-grayscale")]
    pub toggle_grayscale: Option<String>,
    /// Comma-separated `[width, height]`; see [`FilterDimensions::parse_query`].
    #[serde(rename = "filter-dimensions")]
    pub filter_dimensions: Option<String>,
}

/// Apply the route's defaulting rules to the raw query.
pub fn normalize_request(query: &RawImagesQuery) -> PageRequest {
    // `paged` must be all digits; anything else keeps the default 0.
    // (A digits-only value too large for usize is out of range of any
    // real list; saturating keeps the "no 400" policy intact.)
    let page = query
        .paged
        .as_deref()
        .filter(|v| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()))
        .map(|v| v.parse::<usize>().unwrap_or(usize::MAX))
        .unwrap_or(0);

    let toggle_grayscale = query.toggle_grayscale.as_deref() == Some("true");

    let filter = query
        .filter_dimensions
        .as_deref()
        .and_then(FilterDimensions::parse_query);

    PageRequest {
        page,
        toggle_grayscale,
        filter,
    }
}

/// `GET /api/v1/images`
async fn images(
    State(config): State<Arc<GalleryConfig>>,
    Query(query): Query<RawImagesQuery>,
) -> Response {
    let request = normalize_request(&query);

    match fetch_page(&config, &request).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => {
            warn!("images request failed: {err}");
            Json(ErrorPayload {
                error: err.to_string(),
            })
            .into_response()
        }
    }
}

/// Build the application router over a shared config.
pub fn router(config: GalleryConfig) -> Router {
    Router::new()
        .route("/api/v1/images", get(images))
        .with_state(Arc::new(config))
}

/// Bind `addr` and serve the router until the task is cancelled.
pub async fn serve(config: GalleryConfig, addr: std::net::SocketAddr) -> std::io::Result<()> {
    let app = router(config);
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(
        paged: Option<&str>,
        toggle: Option<&str>,
        filter: Option<&str>,
    ) -> RawImagesQuery {
        RawImagesQuery {
            paged: paged.map(str::to_string),
            toggle_grayscale: toggle.map(str::to_string),
            filter_dimensions: filter.map(str::to_string),
        }
    }

    #[test]
    fn defaults_with_no_parameters() {
        let req = normalize_request(&RawImagesQuery::default());
        assert_eq!(req.page, 0);
        assert!(!req.toggle_grayscale);
        assert!(req.filter.is_none());
    }

    #[test]
    fn digit_paged_is_honoured() {
        let req = normalize_request(&query(Some("3"), None, None));
        assert_eq!(req.page, 3);
    }

    #[test]
    fn malformed_paged_keeps_default() {
        for bad in ["-1", "2.5", "abc", "1e3", ""] {
            let req = normalize_request(&query(Some(bad), None, None));
            assert_eq!(req.page, 0, "paged={bad:?} should default");
        }
    }

    #[test]
    fn grayscale_requires_literal_true() {
        assert!(normalize_request(&query(None, Some("true"), None)).toggle_grayscale);
        for not_true in ["TRUE", "1", "yes", ""] {
            assert!(
                !normalize_request(&query(None, Some(not_true), None)).toggle_grayscale,
                "toggle-grayscale={not_true:?} should be treated as absent"
            );
        }
    }

    #[test]
    fn filter_dimensions_coercion() {
        let req = normalize_request(&query(None, None, Some("100,abc")));
        assert_eq!(
            req.filter,
            Some(FilterDimensions {
                width: 100,
                height: -1
            })
        );

        // Wrong arity is malformed, hence absent.
        assert!(normalize_request(&query(None, None, Some("100"))).filter.is_none());
    }
}
