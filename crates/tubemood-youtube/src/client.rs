//! HTTP client for the YouTube Data API v3 comment threads.
//!
//! Wraps `reqwest` with API key handling, optional basic auth for gateways that
//! front the API, continuation-token paging, and page/result caps.

use std::time::Duration;

use reqwest::{Client, Url};

use tubemood_core::Comment;

use crate::error::YoutubeError;
use crate::types::{comment_from_item, ApiErrorEnvelope, CommentThreadList};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";
const DEFAULT_USER_AGENT: &str = "tubemood/0.1 (comment-sentiment)";

/// Largest `maxResults` the endpoint accepts.
pub const MAX_PAGE_SIZE: usize = 100;

/// Caps applied while paging through one video's comments.
///
/// `None` means unlimited. With both unset the fetcher follows continuation
/// tokens until the API stops returning one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchLimits {
    pub max_pages: Option<u32>,
    pub max_results: Option<usize>,
}

/// One decoded page of comment threads.
#[derive(Debug, Clone)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub next_page_token: Option<String>,
}

/// Outcome of fetching one video.
///
/// `error` is set when a request failed; `comments` then holds whatever was
/// collected before the failure (possibly nothing).
#[derive(Debug)]
pub struct VideoFetch {
    pub video_id: String,
    pub comments: Vec<Comment>,
    pub pages: u32,
    pub error: Option<YoutubeError>,
}

/// Client for the `commentThreads` endpoint.
///
/// Use [`YoutubeClient::new`] for production or [`YoutubeClient::with_base_url`]
/// to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
    basic_auth: Option<(String, String)>,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        Self::build(api_key, timeout_secs, base_url, DEFAULT_USER_AGENT)
    }

    /// Creates a client with every transport setting explicit.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::with_base_url`].
    pub fn build(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
        user_agent: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash keeps `Url::join` appending the endpoint instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|_| YoutubeError::InvalidBaseUrl(base_url.into()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            basic_auth: None,
        })
    }

    /// Send HTTP basic-auth credentials with every request.
    #[must_use]
    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Self {
        self.basic_auth = Some((username.to_owned(), password.to_owned()));
        self
    }

    /// Fetches a single page of top-level comment threads, newest first.
    ///
    /// `max_results` is clamped to `1..=100`.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] on a non-2xx status.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the body is not a thread list.
    pub async fn fetch_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
        max_results: usize,
    ) -> Result<CommentPage, YoutubeError> {
        let page_size = max_results.clamp(1, MAX_PAGE_SIZE).to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", page_size.as_str()),
            ("order", "time"),
            ("textFormat", "plainText"),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.build_url("commentThreads", &params)?;
        let body = self.request_text(&url).await?;

        let list: CommentThreadList =
            serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
                context: format!("commentThreads(videoId={video_id})"),
                source: e,
            })?;

        let comments = list
            .items
            .iter()
            .map(|item| comment_from_item(item, video_id))
            .collect();

        Ok(CommentPage {
            comments,
            next_page_token: list.next_page_token.filter(|t| !t.is_empty()),
        })
    }

    /// Pages through one video's comments until the continuation token runs
    /// out or a limit in `limits` is reached.
    ///
    /// Never returns an error: a failed request ends paging and is reported
    /// in [`VideoFetch::error`] alongside the comments gathered so far.
    pub async fn fetch_comments(&self, video_id: &str, limits: FetchLimits) -> VideoFetch {
        let mut comments: Vec<Comment> = Vec::new();
        let mut pages: u32 = 0;
        let mut token: Option<String> = None;

        loop {
            if limits.max_pages.is_some_and(|max| pages >= max) {
                break;
            }
            let remaining = limits
                .max_results
                .map_or(MAX_PAGE_SIZE, |max| max.saturating_sub(comments.len()));
            if remaining == 0 {
                break;
            }

            match self.fetch_page(video_id, token.as_deref(), remaining).await {
                Ok(page) => {
                    pages += 1;
                    tracing::debug!(
                        video_id,
                        page = pages,
                        count = page.comments.len(),
                        "fetched comment page"
                    );
                    comments.extend(page.comments);
                    token = page.next_page_token;
                }
                Err(e) => {
                    return VideoFetch {
                        video_id: video_id.to_string(),
                        comments,
                        pages,
                        error: Some(e),
                    };
                }
            }

            if token.is_none() {
                break;
            }
        }

        if let Some(max) = limits.max_results {
            comments.truncate(max);
        }

        VideoFetch {
            video_id: video_id.to_string(),
            comments,
            pages,
            error: None,
        }
    }

    /// Builds the request URL with the API key and percent-encoded parameters.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, YoutubeError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|_| YoutubeError::InvalidBaseUrl(self.base_url.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request and returns the body, mapping non-2xx statuses to
    /// [`YoutubeError::Api`] with the API's own error message when present.
    async fn request_text(&self, url: &Url) -> Result<String, YoutubeError> {
        let mut request = self.client.get(url.clone());
        if let Some((user, pass)) = &self.basic_auth {
            request = request.basic_auth(user, Some(pass));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .ok()
                .map(|env| env.error.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").into());
            return Err(YoutubeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}
