//! Parse the raw image list and chunk it into pages.
//!
//! The upstream document is "CSV" only in name: one image URL per line,
//! CRLF separators, no header, no quoting. The split is deliberately naive —
//! no trimming, no emptiness validation — because the downstream contract is
//! "every line is a candidate URL", and a line the filter cannot read is
//! still a valid gallery entry.
//!
//! ## Empty input
//!
//! Wholly empty text yields zero lines and therefore zero pages (the
//! alternative — one page containing a single empty string — leaked a bogus
//! entry into the gallery). [`crate::images::select_page`] maps zero pages to
//! an empty result with `last_page = -1` rather than an error.

/// Split the raw text into candidate image URLs on CRLF boundaries.
///
/// A trailing CRLF produces a final empty-string candidate, exactly as the
/// separator-split semantics dictate; only wholly empty input is special.
pub fn split_image_urls(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split("\r\n").map(str::to_string).collect()
}

/// Chunk an ordered URL list into consecutive pages of at most `page_size`.
///
/// Order is preserved: concatenating the pages reproduces the input. An
/// empty list yields zero pages.
pub fn chunk_pages(urls: Vec<String>, page_size: usize) -> Vec<Vec<String>> {
    debug_assert!(page_size > 0, "page_size is validated at config build");
    let mut pages = Vec::with_capacity(urls.len().div_ceil(page_size));
    let mut urls = urls.into_iter();
    loop {
        let page: Vec<String> = urls.by_ref().take(page_size).collect();
        if page.is_empty() {
            break;
        }
        pages.push(page);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img{i}")).collect()
    }

    #[test]
    fn splits_on_crlf_only() {
        let raw = "a/100/50\r\nb/200/75\r\nplain";
        assert_eq!(split_image_urls(raw), vec!["a/100/50", "b/200/75", "plain"]);
    }

    #[test]
    fn lone_lf_is_not_a_separator() {
        assert_eq!(split_image_urls("a\nb"), vec!["a\nb"]);
    }

    #[test]
    fn trailing_crlf_keeps_empty_candidate() {
        assert_eq!(split_image_urls("a\r\n"), vec!["a", ""]);
    }

    #[test]
    fn empty_input_yields_zero_lines() {
        assert!(split_image_urls("").is_empty());
    }

    #[test]
    fn chunks_of_six_with_remainder() {
        let pages = chunk_pages(urls(7), 6);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 6);
        assert_eq!(pages[1], vec!["img6"]);
    }

    #[test]
    fn exact_multiple_has_no_short_page() {
        let pages = chunk_pages(urls(12), 6);
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.len() == 6));
    }

    #[test]
    fn chunking_preserves_order() {
        let input = urls(20);
        let pages = chunk_pages(input.clone(), 6);
        let rejoined: Vec<String> = pages.into_iter().flatten().collect();
        assert_eq!(rejoined, input);
    }

    #[test]
    fn empty_list_yields_zero_pages() {
        assert!(chunk_pages(Vec::new(), 6).is_empty());
    }
}
