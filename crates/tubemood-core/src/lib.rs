//! Shared domain types and configuration for tubemood.

pub mod app_config;
pub mod comments;
pub mod config;
pub mod video_id;
pub mod videos;

pub use app_config::AppConfig;
pub use comments::{
    dedupe_comments, Comment, ScoredComment, SentimentLabel, Thresholds, VideoAggregate,
};
pub use config::load_app_config_from_env;
pub use video_id::parse_video_id;
pub use videos::{load_videos, VideoEntry, VideosFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unrecognized video reference: {0}")]
    InvalidVideoRef(String),

    #[error("invalid thresholds: positive {positive} must be >= negative {negative}")]
    InvalidThresholds { positive: f32, negative: f32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read videos file {path}: {source}")]
    VideosFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse videos file: {0}")]
    VideosFileParse(#[from] serde_yaml::Error),

    #[error("videos file validation failed: {0}")]
    Validation(String),
}
