//! Pipeline stages for turning the raw remote image list into one page.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and keeps the only stage with
//! network I/O ([`fetch`]) away from the pure text transforms.
//!
//! ## Data Flow
//!
//! ```text
//! fetch ──▶ parse ──▶ filter ──▶ chunk ──▶ grayscale
//! (reqwest)  (CRLF)   (regex)   (by 6)    (?grayscale)
//! ```
//!
//! 1. [`fetch`]     — single GET of the CRLF-separated image list
//! 2. [`parse`]     — split into candidate URLs and chunk into pages;
//!    filtering runs *before* chunking so page boundaries are computed on
//!    the filtered set
//! 3. [`filter`]    — drop URLs whose path-encoded width/height disagree
//!    with the requested dimensions
//! 4. [`grayscale`] — toggle the `?grayscale` flag on the selected page only

pub mod fetch;
pub mod filter;
pub mod grayscale;
pub mod parse;
