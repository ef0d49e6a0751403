//! Sequential multi-video fetching with per-video soft failure.

use serde::Serialize;

use tubemood_core::{dedupe_comments, Comment};

use crate::cache::CommentCache;
use crate::client::{FetchLimits, YoutubeClient};

/// What happened to one video during a batch fetch.
#[derive(Debug, Clone, Serialize)]
pub struct VideoReport {
    pub video_id: String,
    pub comment_count: usize,
    pub pages: u32,
    pub from_cache: bool,
    /// Rendered error when the fetch failed part-way or entirely.
    pub error: Option<String>,
}

/// Result of fetching a list of videos.
#[derive(Debug, Clone, Default)]
pub struct BatchFetch {
    /// All fetched comments, deduplicated by id across videos and pages.
    pub comments: Vec<Comment>,
    pub reports: Vec<VideoReport>,
}

impl BatchFetch {
    /// Reports of videos whose fetch hit an error.
    pub fn failed(&self) -> impl Iterator<Item = &VideoReport> {
        self.reports.iter().filter(|r| r.error.is_some())
    }
}

impl YoutubeClient {
    /// Fetch comments for every video in `video_ids`, one after another.
    ///
    /// A failing video is logged and contributes whatever it gathered before
    /// the failure; the batch always runs to the end. Cached videos are served
    /// from `cache` without a request, and only error-free fetches are cached.
    pub async fn fetch_videos(
        &self,
        video_ids: &[String],
        limits: FetchLimits,
        cache: &mut CommentCache,
    ) -> BatchFetch {
        let mut comments: Vec<Comment> = Vec::new();
        let mut reports = Vec::with_capacity(video_ids.len());

        cache.purge_expired();

        for video_id in video_ids {
            if let Some(cached) = cache.get(video_id) {
                tracing::debug!(video_id = %video_id, count = cached.len(), "serving comments from cache");
                reports.push(VideoReport {
                    video_id: video_id.clone(),
                    comment_count: cached.len(),
                    pages: 0,
                    from_cache: true,
                    error: None,
                });
                comments.extend_from_slice(cached);
                continue;
            }

            let fetch = self.fetch_comments(video_id, limits).await;
            let error = fetch.error.as_ref().map(ToString::to_string);

            match &error {
                Some(e) => {
                    tracing::warn!(
                        video_id = %video_id,
                        pages = fetch.pages,
                        partial = fetch.comments.len(),
                        error = %e,
                        "comment fetch failed; continuing with next video"
                    );
                }
                None => {
                    tracing::debug!(
                        video_id = %video_id,
                        pages = fetch.pages,
                        count = fetch.comments.len(),
                        "fetched video comments"
                    );
                    cache.insert(video_id, fetch.comments.clone());
                }
            }

            reports.push(VideoReport {
                video_id: video_id.clone(),
                comment_count: fetch.comments.len(),
                pages: fetch.pages,
                from_cache: false,
                error,
            });
            comments.extend(fetch.comments);
        }

        let before = comments.len();
        let comments = dedupe_comments(comments);
        if comments.len() != before {
            tracing::debug!(
                dropped = before - comments.len(),
                "dropped duplicate comments"
            );
        }

        tracing::info!(
            videos = video_ids.len(),
            failed = reports.iter().filter(|r| r.error.is_some()).count(),
            comments = comments.len(),
            "comment batch complete"
        );

        BatchFetch { comments, reports }
    }
}
