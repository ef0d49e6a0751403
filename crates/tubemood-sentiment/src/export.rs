//! CSV and JSON export of scored comments.

use std::io::Write;

use chrono::SecondsFormat;
use serde::Serialize;

use tubemood_core::{ScoredComment, SentimentLabel};

use crate::error::SentimentError;
use crate::pipeline::PipelineReport;

const CSV_HEADER: [&str; 4] = ["author", "comment", "label", "timestamp"];

#[derive(Serialize)]
struct CsvRow<'a> {
    author: &'a str,
    comment: &'a str,
    label: SentimentLabel,
    timestamp: String,
}

impl<'a> From<&'a ScoredComment> for CsvRow<'a> {
    fn from(scored: &'a ScoredComment) -> Self {
        Self {
            author: &scored.comment.author,
            comment: &scored.comment.text,
            label: scored.label,
            timestamp: scored
                .comment
                .published_at
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_default(),
        }
    }
}

/// Write one row per comment with columns `author,comment,label,timestamp`.
///
/// The comment column carries the original text; the timestamp is RFC 3339
/// in UTC, or empty when the API gave none. Rows end in `\r\n`. The header
/// is written even when `comments` is empty.
///
/// # Errors
///
/// Returns [`SentimentError::Csv`] if a row cannot be written, or
/// [`SentimentError::Io`] if the final flush fails.
pub fn write_csv<W: Write>(out: W, comments: &[ScoredComment]) -> Result<(), SentimentError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for scored in comments {
        writer.serialize(CsvRow::from(scored))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the full report as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`SentimentError::Json`] if serialization or the writer fails.
pub fn write_json<W: Write>(mut out: W, report: &PipelineReport) -> Result<(), SentimentError> {
    serde_json::to_writer_pretty(&mut out, report)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
