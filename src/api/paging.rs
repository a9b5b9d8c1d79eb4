//! Page selector semantics shared by the listing endpoints.
//!
//! The service reads the page number from a `page` request header and only
//! expects it for pages past the first. It reports no total-page count for
//! category listings, so "page too high" can only be detected from an empty
//! result, while "page too low" is rejected locally before any request.

/// Replies shown per thread page. Fixed upstream assumption; the range
/// check desyncs silently if the server ever changes its page size.
pub(crate) const REPLIES_PER_PAGE: u32 = 30;

/// The header carrying the page selector, sent only when `page > 1`.
pub(crate) fn header(page: Option<i32>) -> Option<(&'static str, String)> {
    match page {
        Some(p) if p > 1 => Some(("page", p.to_string())),
        _ => None,
    }
}

/// A selector that participates in range checks.
///
/// Page zero behaves exactly like an absent selector: no header is sent
/// and no range check applies.
pub(crate) fn selected(page: Option<i32>) -> Option<i32> {
    page.filter(|p| *p != 0)
}

/// Check if the selector falls below the valid range.
pub(crate) fn below_range(page: Option<i32>) -> bool {
    matches!(selected(page), Some(p) if p < 1)
}

/// Number of reply pages in a thread. A thread always has at least one
/// page, even with zero replies.
pub(crate) fn total_reply_pages(replies: u32) -> u32 {
    ((replies + REPLIES_PER_PAGE - 1) / REPLIES_PER_PAGE).max(1)
}
