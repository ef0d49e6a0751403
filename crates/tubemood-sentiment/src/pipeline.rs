//! End-to-end comment sentiment run: fetch, score, aggregate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tubemood_core::{AppConfig, Comment, ScoredComment, Thresholds};
use tubemood_youtube::{CommentCache, FetchLimits, VideoReport, YoutubeClient};

use crate::aggregate::{aggregate, SentimentSummary};
use crate::error::SentimentError;
use crate::scorer::score_all;

/// Number of frequent tokens kept in a summary unless overridden.
pub const DEFAULT_TOP_TOKENS: usize = 20;

/// Inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub video_ids: Vec<String>,
    pub limits: FetchLimits,
    pub thresholds: Thresholds,
    pub top_tokens: usize,
}

impl PipelineConfig {
    /// Fetch limits and thresholds from `config`, applied to `video_ids`.
    #[must_use]
    pub fn from_app_config(config: &AppConfig, video_ids: Vec<String>) -> Self {
        Self {
            video_ids,
            limits: FetchLimits {
                max_pages: config.max_pages,
                max_results: config.max_results,
            },
            thresholds: config.thresholds,
            top_tokens: DEFAULT_TOP_TOKENS,
        }
    }
}

/// Output of a pipeline run, serialized as-is by the JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub generated_at: DateTime<Utc>,
    pub summary: SentimentSummary,
    pub comments: Vec<ScoredComment>,
    pub fetches: Vec<VideoReport>,
}

impl PipelineReport {
    /// Videos whose fetch failed or stopped early.
    pub fn failed_fetches(&self) -> impl Iterator<Item = &VideoReport> {
        self.fetches.iter().filter(|f| f.error.is_some())
    }
}

/// Score and aggregate an already collected comment set.
#[must_use]
pub fn analyze(
    comments: Vec<Comment>,
    thresholds: &Thresholds,
    top_n: usize,
) -> (Vec<ScoredComment>, SentimentSummary) {
    let scored = score_all(comments, thresholds);
    let summary = aggregate(&scored, top_n);
    (scored, summary)
}

/// Fetch comments for every configured video, then score and aggregate them.
///
/// Per-video fetch failures do not fail the run: they are logged, recorded in
/// [`PipelineReport::fetches`], and the remaining videos are still analyzed.
///
/// # Errors
///
/// Returns [`SentimentError::NoVideos`] if `config.video_ids` is empty.
pub async fn run_pipeline(
    config: &PipelineConfig,
    client: &YoutubeClient,
    cache: &mut CommentCache,
) -> Result<PipelineReport, SentimentError> {
    if config.video_ids.is_empty() {
        return Err(SentimentError::NoVideos);
    }

    let batch = client
        .fetch_videos(&config.video_ids, config.limits, cache)
        .await;

    if batch.comments.is_empty() {
        tracing::info!(
            videos = config.video_ids.len(),
            "no comments collected; summary will be empty"
        );
    }

    let (comments, summary) = analyze(batch.comments, &config.thresholds, config.top_tokens);

    tracing::info!(
        comments = summary.total_comments,
        authors = summary.total_authors,
        positive = summary.labels.positive,
        negative = summary.labels.negative,
        neutral = summary.labels.neutral,
        "sentiment analysis complete"
    );

    Ok(PipelineReport {
        generated_at: Utc::now(),
        summary,
        comments,
        fetches: batch.reports,
    })
}
