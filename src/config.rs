//! Configuration for the gallery service.
//!
//! All behaviour is controlled through [`GalleryConfig`], built via its
//! [`GalleryConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share the config across handlers, serialise it for logging,
//! and diff two deployments to understand why their responses differ.

use crate::error::GalleryError;
use serde::{Deserialize, Serialize};

/// Default upstream source: a pastebin raw document with one image URL per
/// CRLF-separated line.
pub const DEFAULT_SOURCE_URL: &str = "https://pastebin.com/raw/BmA8B0tY";

/// Default number of image URLs per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Configuration for the image-list pipeline and server.
///
/// Built via [`GalleryConfig::builder()`] or [`GalleryConfig::default()`].
///
/// # Example
/// ```rust
/// use photoview::GalleryConfig;
///
/// let config = GalleryConfig::builder()
///     .source_url("https://example.test/images.csv")
///     .page_size(6)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// URL of the remote image list. Fetched fresh on every request; the
    /// service keeps no cache, so an updated list is visible immediately.
    pub source_url: String,

    /// Number of image URLs per page. Default: 6.
    ///
    /// Every page except possibly the last holds exactly this many URLs.
    /// The value is part of the pagination contract with the browser client,
    /// so changing it invalidates any page index the client is holding.
    pub page_size: usize,

    /// Upstream fetch timeout in seconds. Default: 30.
    ///
    /// The fetch is the only network dependency of a request; a hung source
    /// would otherwise hold the request open indefinitely. No retries — a
    /// failed fetch surfaces as the error payload on this one response.
    pub fetch_timeout_secs: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            fetch_timeout_secs: 30,
        }
    }
}

impl GalleryConfig {
    /// Create a new builder for `GalleryConfig`.
    pub fn builder() -> GalleryConfigBuilder {
        GalleryConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`GalleryConfig`].
#[derive(Debug)]
pub struct GalleryConfigBuilder {
    config: GalleryConfig,
}

impl GalleryConfigBuilder {
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.config.source_url = url.into();
        self
    }

    pub fn page_size(mut self, n: usize) -> Self {
        self.config.page_size = n;
        self
    }

    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.config.fetch_timeout_secs = secs;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<GalleryConfig, GalleryError> {
        let c = &self.config;
        if c.page_size == 0 {
            return Err(GalleryError::InvalidConfig(
                "page_size must be ≥ 1".into(),
            ));
        }
        if !c.source_url.starts_with("http://") && !c.source_url.starts_with("https://") {
            return Err(GalleryError::InvalidConfig(format!(
                "source_url must be an HTTP/HTTPS URL, got '{}'",
                c.source_url
            )));
        }
        if c.fetch_timeout_secs == 0 {
            return Err(GalleryError::InvalidConfig(
                "fetch_timeout_secs must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}
