//! Resolution of video URLs and share links to bare 11-character video ids.

use std::sync::LazyLock;

use regex::Regex;

use crate::CoreError;

static BARE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("valid bare id regex"));
static URL_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:https?://)?(?:www\.|m\.|music\.)?(?:youtu\.be/|youtube\.com/(?:watch\?(?:[^#]*&)?v=|shorts/|embed/|live/))([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
    )
    .expect("valid video url regex")
});

/// Extract the video id from a bare id, a `youtu.be` share link, or a
/// `youtube.com` watch/shorts/embed/live URL.
///
/// Share-link suffixes such as `?si=...` and `&t=42s` are ignored.
///
/// # Errors
///
/// Returns [`CoreError::InvalidVideoRef`] when no id can be found.
pub fn parse_video_id(input: &str) -> Result<String, CoreError> {
    let trimmed = input.trim();
    if BARE_ID_RE.is_match(trimmed) {
        return Ok(trimmed.to_string());
    }
    URL_ID_RE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| CoreError::InvalidVideoRef(trimmed.to_string()))
}
