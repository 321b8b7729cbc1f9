//! Dimension filtering: keep only URLs whose path-encoded size matches.
//!
//! By convention the image URLs encode their size in the last two path
//! segments — `.../1200/800` is 1200 px wide and 800 px tall. There is no
//! structured URL model here; the segments are extracted by regex, in the
//! exact positions the convention dictates:
//!
//! * width  — the all-digits segment immediately followed by `/<digits>`
//!   running to end-of-string (i.e. the second-to-last segment)
//! * height — the all-digits segment after the final `/`, at end-of-string
//!
//! A URL where a segment cannot be extracted is **kept**: absence of a match
//! is not a rejection, only a present-but-different dimension is. That keeps
//! unsized entries (plain filenames, external links) visible in a filtered
//! gallery.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sentinel meaning "do not filter on this axis".
pub const UNCONSTRAINED: i64 = -1;

// The original patterns used lookbehind/lookahead to anchor on the path
// separators; the regex crate supports neither, so capture groups express
// the same positions.
static RE_WIDTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"/(\d+)/\d+$").unwrap());
static RE_HEIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/(\d+)$").unwrap());

/// A `[width, height]` constraint, `-1` on either axis meaning unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDimensions {
    pub width: i64,
    pub height: i64,
}

impl FilterDimensions {
    /// Parse the `filter-dimensions` query value.
    ///
    /// The value must be a comma-separated two-element list. Each element
    /// that is not a valid positive integer is coerced to `-1`; a value
    /// without exactly two elements is malformed and treated as absent
    /// (`None`), matching the route's silently-default error policy.
    pub fn parse_query(value: &str) -> Option<Self> {
        let mut parts = value.split(',');
        let width = coerce_axis(parts.next()?);
        let height = coerce_axis(parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        Some(Self { width, height })
    }

    /// True when neither axis constrains anything — a `[-1, -1]` filter is
    /// a no-op and the list passes through untouched.
    pub fn is_unconstrained(&self) -> bool {
        self.width == UNCONSTRAINED && self.height == UNCONSTRAINED
    }

    /// Does `url` survive this filter?
    pub fn matches(&self, url: &str) -> bool {
        if self.width != UNCONSTRAINED {
            if let Some(caps) = RE_WIDTH.captures(url) {
                if caps[1].parse::<i64>() != Ok(self.width) {
                    return false;
                }
            }
        }
        if self.height != UNCONSTRAINED {
            if let Some(caps) = RE_HEIGHT.captures(url) {
                if caps[1].parse::<i64>() != Ok(self.height) {
                    return false;
                }
            }
        }
        true
    }

    /// The serialised `[width, height]` form used in `PageResult`.
    pub fn to_vec(self) -> Vec<i64> {
        vec![self.width, self.height]
    }
}

/// One element of the query value: a positive integer, or `-1` for anything
/// else ("0", "abc", "", "1.5", negative numbers, overflow).
fn coerce_axis(part: &str) -> i64 {
    match part.trim().parse::<i64>() {
        Ok(n) if n >= 1 => n,
        _ => UNCONSTRAINED,
    }
}

/// Apply an optional filter to the full candidate list, preserving order.
///
/// Runs before chunking — page boundaries are computed on the filtered set.
pub fn apply(urls: Vec<String>, dims: Option<FilterDimensions>) -> Vec<String> {
    match dims {
        Some(d) if !d.is_unconstrained() => {
            urls.into_iter().filter(|u| d.matches(u)).collect()
        }
        _ => urls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: i64, height: i64) -> FilterDimensions {
        FilterDimensions { width, height }
    }

    #[test]
    fn parse_query_both_axes() {
        assert_eq!(FilterDimensions::parse_query("100,50"), Some(dims(100, 50)));
    }

    #[test]
    fn parse_query_coerces_invalid_elements() {
        assert_eq!(FilterDimensions::parse_query("abc,50"), Some(dims(-1, 50)));
        assert_eq!(FilterDimensions::parse_query("100,"), Some(dims(100, -1)));
        assert_eq!(FilterDimensions::parse_query("0,-3"), Some(dims(-1, -1)));
    }

    #[test]
    fn parse_query_wrong_arity_is_absent() {
        assert_eq!(FilterDimensions::parse_query("100"), None);
        assert_eq!(FilterDimensions::parse_query("100,50,25"), None);
    }

    #[test]
    fn width_mismatch_discards() {
        assert!(!dims(100, -1).matches("b/200/50"));
        assert!(dims(100, -1).matches("a/100/50"));
    }

    #[test]
    fn height_mismatch_discards() {
        assert!(!dims(-1, 50).matches("c/100/75"));
        assert!(dims(-1, 50).matches("a/100/50"));
    }

    #[test]
    fn no_match_is_not_a_rejection() {
        // "d" has no extractable dimensions at all; "a/100" has a height
        // segment but no width segment. Both survive the width check.
        assert!(dims(100, -1).matches("d"));
        assert!(dims(999, -1).matches("d"));
        assert!(dims(999, -1).matches("a/100"));
    }

    #[test]
    fn comparison_is_numeric() {
        // A zero-padded segment still equals the requested dimension.
        assert!(dims(100, -1).matches("a/0100/50"));
    }

    #[test]
    fn unconstrained_filter_is_noop() {
        let urls: Vec<String> = vec!["a/100/50".into(), "b".into()];
        assert_eq!(apply(urls.clone(), Some(dims(-1, -1))), urls);
        assert_eq!(apply(urls.clone(), None), urls);
    }

    #[test]
    fn spec_scenario_width_and_height() {
        let urls: Vec<String> = [
            "a/100/50", "b/200/50", "c/100/75", "d", "e", "f", "g",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let survivors = apply(urls, Some(dims(100, 50)));
        assert_eq!(survivors, vec!["a/100/50", "d", "e", "f", "g"]);
    }
}
