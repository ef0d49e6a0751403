//! Comment text cleanup ahead of scoring.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("valid url regex"));

/// Emoji, pictographs and other symbols outside regular text.
fn is_symbol(c: char) -> bool {
    c > '\u{FFFF}'
        || matches!(c,
            '\u{2600}'..='\u{27BF}'
            | '\u{2B00}'..='\u{2BFF}'
            | '\u{FE00}'..='\u{FE0F}'
            | '\u{200D}'
            | '\u{20E3}'
        )
        || (c.is_control() && !c.is_whitespace())
}

/// Strip symbols, HTML-like tags and URLs, then collapse whitespace.
///
/// Each removal leaves a space behind so neighbouring words never fuse. The
/// steps run in that order, which keeps the function idempotent: removing a
/// symbol cannot form a new tag or URL that a second pass would catch.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    let without_symbols: String = raw
        .chars()
        .map(|c| if is_symbol(c) { ' ' } else { c })
        .collect();
    let without_tags = TAG_RE.replace_all(&without_symbols, " ");
    let without_urls = URL_RE.replace_all(&without_tags, " ");
    without_urls.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`normalize_text`] for loosely typed input; anything but a string yields `""`.
#[must_use]
pub fn normalize_value(raw: &Value) -> String {
    raw.as_str().map(normalize_text).unwrap_or_default()
}
