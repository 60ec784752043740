//! Utility functions

use once_cell::sync::Lazy;
use regex::Regex;

static SLUG_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\-_/]").expect("slug character class is a valid regex"));
static SLASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"/+").expect("slash run is a valid regex"));

/// Clean a user-typed slug into a URL-safe segment.
///
/// Characters outside `[A-Za-z0-9-_/]` become `-`, the first run of slashes
/// collapses to a single `/`, and the result is lowercased.
pub fn sanitize_slug(input: &str) -> String {
    let replaced = SLUG_DISALLOWED.replace_all(input, "-");
    SLASH_RUN.replace(&replaced, "/").to_ascii_lowercase()
}

/// `None` for blank strings, otherwise the trimmed value.
pub fn trim_to_option(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
