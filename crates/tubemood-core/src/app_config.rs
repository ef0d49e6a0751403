use std::path::PathBuf;

use crate::comments::Thresholds;

#[derive(Clone)]
pub struct AppConfig {
    pub youtube_api_key: String,
    pub api_username: Option<String>,
    pub api_password: Option<String>,
    pub api_base_url: String,
    pub log_level: String,
    pub videos_path: PathBuf,
    /// `None` means no page cap.
    pub max_pages: Option<u32>,
    /// `None` means no result cap.
    pub max_results: Option<usize>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Lifetime of cached per-video fetches; zero disables the cache.
    pub cache_ttl_secs: u64,
    pub thresholds: Thresholds,
}

impl AppConfig {
    /// Basic-auth credentials, present only when a username is configured.
    #[must_use]
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (&self.api_username, &self.api_password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("youtube_api_key", &"[redacted]")
            .field("api_username", &self.api_username)
            .field(
                "api_password",
                &self.api_password.as_ref().map(|_| "[redacted]"),
            )
            .field("api_base_url", &self.api_base_url)
            .field("log_level", &self.log_level)
            .field("videos_path", &self.videos_path)
            .field("max_pages", &self.max_pages)
            .field("max_results", &self.max_results)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("thresholds", &self.thresholds)
            .finish()
    }
}
