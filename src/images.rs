//! Pipeline entry points: one requested page from the remote image list.
//!
//! [`fetch_page`] is the request-scoped path the HTTP handler uses: fetch
//! the list, then run the pure transform. [`select_page`] is the transform
//! alone, taking raw text — the seam the unit tests and any embedding caller
//! work against, with every parameter explicit (nothing below the HTTP
//! handler reads ambient request state).

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::output::PageResult;
use crate::pipeline::{fetch, filter, grayscale, parse};
use crate::pipeline::filter::FilterDimensions;
use tracing::{debug, info};

/// Everything a request asks of the pipeline, normalised by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRequest {
    /// Zero-based page index to return.
    pub page: usize,
    /// Rewrite the returned page's URLs to flip their `?grayscale` flag.
    pub toggle_grayscale: bool,
    /// Optional `[width, height]` constraint; `None` skips filtering.
    pub filter: Option<FilterDimensions>,
}

/// Fetch the remote image list and return the requested page.
///
/// One fetch per call, no cache, no retry. Upstream failures surface as
/// [`GalleryError::UpstreamFetch`] / [`GalleryError::UpstreamTimeout`] /
/// [`GalleryError::UpstreamStatus`]; the HTTP layer decides how to present
/// them.
pub async fn fetch_page(
    config: &GalleryConfig,
    request: &PageRequest,
) -> Result<PageResult, GalleryError> {
    let raw = fetch::fetch_image_list(&config.source_url, config.fetch_timeout_secs).await?;
    select_page(&raw, request, config.page_size)
}

/// Run the pure pipeline over already-fetched text.
///
/// # Errors
/// [`GalleryError::PageOutOfRange`] when the list has pages but the
/// requested index is past the last one. An empty (or fully filtered-out)
/// list is *not* an error: any index yields an empty `image_urls` with
/// `last_page = -1`.
pub fn select_page(
    raw: &str,
    request: &PageRequest,
    page_size: usize,
) -> Result<PageResult, GalleryError> {
    // ── Step 1: split into candidate URLs ────────────────────────────────
    let urls = parse::split_image_urls(raw);
    debug!("Parsed {} candidate URLs", urls.len());

    // ── Step 2: filter before chunking ───────────────────────────────────
    // Page boundaries must be computed on the filtered set, or filtering
    // would punch holes in fixed-size pages.
    let survivors = filter::apply(urls, request.filter);

    // ── Step 3: chunk into pages ─────────────────────────────────────────
    let mut pages = parse::chunk_pages(survivors, page_size);
    let last_page = pages.len() as i64 - 1;

    // ── Step 4: select the requested page ────────────────────────────────
    let selected = if pages.is_empty() {
        // Empty list: every index is "past the end" and answers empty
        // rather than erroring. See DESIGN.md.
        Vec::new()
    } else if request.page < pages.len() {
        pages.swap_remove(request.page)
    } else {
        return Err(GalleryError::PageOutOfRange {
            page: request.page,
            last_page,
        });
    };

    // ── Step 5: toggle grayscale on the selected page only ───────────────
    let image_urls = if request.toggle_grayscale {
        grayscale::toggle_page(selected)
    } else {
        selected
    };

    info!(
        "Selected page {}/{} ({} URLs, grayscale toggle: {})",
        request.page,
        last_page,
        image_urls.len(),
        request.toggle_grayscale
    );

    Ok(PageResult {
        page: request.page,
        last_page,
        image_urls,
        filter_dimensions: request
            .filter
            .map(FilterDimensions::to_vec)
            .unwrap_or_default(),
    })
}
