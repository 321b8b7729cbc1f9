//! # photoview
//!
//! A minimal photo-gallery web service: fetch a remote CRLF-separated list
//! of image URLs, filter it by the width/height encoded in each URL's path,
//! chunk it into pages of six, and serve one page at a time as JSON — with
//! an optional `?grayscale` rewrite on the served page.
//!
//! ## Pipeline Overview
//!
//! ```text
//! GET /api/v1/images?paged=N&toggle-grayscale=true&filter-dimensions=W,H
//!  │
//!  ├─ 1. Fetch      one GET of the remote image list (no cache, no retry)
//!  ├─ 2. Parse      split on CRLF, one candidate URL per line
//!  ├─ 3. Filter     regex width/height match against the URL path
//!  ├─ 4. Chunk      pages of 6, boundaries computed on the filtered set
//!  ├─ 5. Select     the requested page; grayscale toggle on that page only
//!  └─ 6. Respond    PageResult JSON, or {"error": ...} on upstream failure
//! ```
//!
//! Everything is request-scoped and ephemeral: each request performs one
//! fresh fetch and one pure in-memory transform. There is no shared mutable
//! state between requests and nothing persists.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use photoview::{serve, GalleryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GalleryConfig::default();
//!     serve(config, "0.0.0.0:8080".parse()?).await?;
//!     Ok(())
//! }
//! ```
//!
//! The pure transform is also usable directly, without a server:
//!
//! ```rust
//! use photoview::{select_page, PageRequest};
//!
//! let raw = "a/100/50\r\nb/200/75";
//! let page = select_page(raw, &PageRequest::default(), 6).unwrap();
//! assert_eq!(page.image_urls.len(), 2);
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod images;
pub mod output;
pub mod pipeline;
pub mod serve;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{GalleryConfig, GalleryConfigBuilder, DEFAULT_PAGE_SIZE, DEFAULT_SOURCE_URL};
pub use error::GalleryError;
pub use images::{fetch_page, select_page, PageRequest};
pub use output::{ErrorPayload, PageResult};
pub use pipeline::filter::{FilterDimensions, UNCONSTRAINED};
pub use serve::{router, serve};
