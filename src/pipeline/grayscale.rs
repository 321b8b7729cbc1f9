//! Grayscale toggle: flip the `?grayscale` flag on a page of URLs.
//!
//! The image host renders a grayscale variant when the URL carries the
//! literal query suffix `?grayscale`. Toggling is a pure string transform —
//! strip the suffix if present anywhere in the URL, append it otherwise —
//! applied independently per URL, so toggling twice returns the original.
//!
//! The toggle runs only on the single page being returned, never on the
//! full list. That is a laziness choice inherited from the original service,
//! and it is part of the contract: pages the client has not requested keep
//! their stored form.

/// The literal flag the image host recognises.
pub const GRAYSCALE_SUFFIX: &str = "?grayscale";

/// Toggle the grayscale flag on one URL.
pub fn toggle_url(url: &str) -> String {
    if url.contains(GRAYSCALE_SUFFIX) {
        url.replace(GRAYSCALE_SUFFIX, "")
    } else {
        format!("{url}{GRAYSCALE_SUFFIX}")
    }
}

/// Toggle the grayscale flag on every URL of a page, preserving order.
pub fn toggle_page(page: Vec<String>) -> Vec<String> {
    page.iter().map(|url| toggle_url(url)).collect()
}
