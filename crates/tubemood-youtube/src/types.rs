//! Wire shapes for `commentThreads.list` and their conversion to [`Comment`].
//!
//! Items are kept as raw JSON and read field by field so that a single
//! malformed record degrades to empty strings instead of failing the page.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use tubemood_core::Comment;

/// `commentThreads.list` response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentThreadList {
    #[serde(default)]
    pub(crate) items: Vec<Value>,
    pub(crate) next_page_token: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub(crate) error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub(crate) message: String,
}

fn str_at<'a>(item: &'a Value, pointer: &str) -> Option<&'a str> {
    item.pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Convert one raw thread item into a [`Comment`].
///
/// The thread id is used as the comment id, falling back to the top-level
/// comment's own id. `textOriginal` is preferred over `textDisplay`, and an
/// unparseable `publishedAt` becomes `None`.
pub(crate) fn comment_from_item(item: &Value, video_id: &str) -> Comment {
    let snippet = "/snippet/topLevelComment/snippet";

    let id = str_at(item, "/id")
        .or_else(|| str_at(item, "/snippet/topLevelComment/id"))
        .unwrap_or_default()
        .to_string();
    let author = str_at(item, &format!("{snippet}/authorDisplayName"))
        .unwrap_or_default()
        .to_string();
    let text = str_at(item, &format!("{snippet}/textOriginal"))
        .or_else(|| str_at(item, &format!("{snippet}/textDisplay")))
        .unwrap_or_default()
        .to_string();
    let published_at = str_at(item, &format!("{snippet}/publishedAt"))
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc));
    let video_id = str_at(item, "/snippet/videoId")
        .unwrap_or(video_id)
        .to_string();

    Comment {
        id,
        video_id,
        author,
        text,
        published_at,
    }
}
