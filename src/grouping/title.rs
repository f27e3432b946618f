//! Domain and title derivation for group labels.
//!
//! Pure functions mapping a tab's URL and page title to a human-readable
//! group label. URL parse failure is not an error here; it simply selects
//! the next fallback.
//!
//! # Fallback Order
//!
//! 1. Hostname of the URL, with one leading `www.` or `m.` prefix stripped
//! 2. Page title, truncated to [`MAX_TITLE_LEN`] characters
//! 3. [`UNTITLED`]

// ============================================================================
// Imports
// ============================================================================

use url::Url;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length, in characters, of a page-title-derived group label.
pub const MAX_TITLE_LEN: usize = 32;

/// Label used when neither a domain nor a page title is available.
pub const UNTITLED: &str = "Untitled";

// ============================================================================
// Derivation
// ============================================================================

/// Derives a display domain from a URL string.
///
/// Strips exactly one leading `www.` or `m.` prefix from the hostname.
/// Returns `None` when the URL does not parse or has no host (e.g.
/// `about:blank`, `data:` URLs).
///
/// # Example
///
/// ```
/// use tab_grouper::grouping::title::domain_from_url;
///
/// assert_eq!(
///     domain_from_url("https://www.example.com/page").as_deref(),
///     Some("example.com")
/// );
/// assert_eq!(domain_from_url("not a url"), None);
/// ```
#[must_use]
pub fn domain_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    let stripped = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(host);

    if stripped.is_empty() {
        return None;
    }

    Some(stripped.to_string())
}

/// Produces a group title for a tab.
///
/// Prefers the derived domain, then the page title truncated to
/// [`MAX_TITLE_LEN`] characters, then [`UNTITLED`]. Total: always returns
/// a non-empty label.
#[must_use]
pub fn group_title_for_tab(url: Option<&str>, page_title: Option<&str>) -> String {
    if let Some(domain) = url.and_then(domain_from_url) {
        return domain;
    }

    match page_title {
        Some(title) if !title.is_empty() => truncate_chars(title, MAX_TITLE_LEN),
        _ => UNTITLED.to_string(),
    }
}

/// Truncates a string to at most `max` characters, on a char boundary.
fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

// ============================================================================
// Tests
// ============================================================================
