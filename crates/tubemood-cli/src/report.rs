//! Plain-text rendering of pipeline results.

use std::io::{self, Write};

use tubemood_core::{SentimentLabel, Thresholds};
use tubemood_sentiment::{score_comment, PipelineReport};

/// Write the summary block printed after `collect`.
pub(crate) fn write_summary<W: Write>(out: &mut W, report: &PipelineReport) -> io::Result<()> {
    let summary = &report.summary;

    let last_update = summary
        .latest_published
        .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M UTC").to_string());
    let dominant = summary
        .labels
        .dominant()
        .map_or_else(|| "-".to_string(), |l| l.to_string());

    writeln!(out, "comments:      {}", summary.total_comments)?;
    writeln!(out, "authors:       {}", summary.total_authors)?;
    writeln!(out, "videos:        {}", summary.total_videos)?;
    writeln!(out, "last comment:  {last_update}")?;
    writeln!(out, "mean score:    {:.3}", summary.mean_score)?;
    writeln!(out, "dominant:      {dominant}")?;
    writeln!(out)?;

    writeln!(out, "{:<10}{:>8}{:>9}", "LABEL", "COUNT", "SHARE")?;
    for label in SentimentLabel::ALL {
        writeln!(
            out,
            "{:<10}{:>8}{:>8.1}%",
            label.to_string(),
            summary.labels.count(label),
            summary.labels.percent(label)
        )?;
    }

    if !summary.videos.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "{:<14}{:>9}{:>9}{:>10}{:>10}{:>9}",
            "VIDEO", "COMMENTS", "AUTHORS", "POSITIVE", "NEGATIVE", "NEUTRAL"
        )?;
        for video in &summary.videos {
            writeln!(
                out,
                "{:<14}{:>9}{:>9}{:>10}{:>10}{:>9}",
                video.video_id,
                video.comment_count,
                video.author_count,
                video.positive,
                video.negative,
                video.neutral
            )?;
        }
    }

    if !summary.top_tokens.is_empty() {
        let words: Vec<String> = summary
            .top_tokens
            .iter()
            .map(|t| format!("{} ({})", t.token, t.count))
            .collect();
        writeln!(out)?;
        writeln!(out, "top words: {}", words.join(", "))?;
    }

    let failed: Vec<_> = report.failed_fetches().collect();
    if !failed.is_empty() {
        writeln!(out)?;
        writeln!(out, "{} video(s) failed to fetch:", failed.len())?;
        for fetch in failed {
            writeln!(
                out,
                "  {} after {} comments: {}",
                fetch.video_id,
                fetch.comment_count,
                fetch.error.as_deref().unwrap_or("unknown error")
            )?;
        }
    }

    Ok(())
}

/// Write one line per text: label, score and normalized text.
pub(crate) fn write_scores<W: Write>(out: &mut W, texts: &[String]) -> io::Result<()> {
    let thresholds = Thresholds::default();
    for text in texts {
        let scored = score_comment(
            tubemood_core::Comment {
                id: String::new(),
                video_id: String::new(),
                author: String::new(),
                text: text.clone(),
                published_at: None,
            },
            &thresholds,
        );
        writeln!(
            out,
            "{:<10}{:>7.3}  {}",
            scored.label.to_string(),
            scored.score,
            scored.normalized
        )?;
    }
    Ok(())
}
