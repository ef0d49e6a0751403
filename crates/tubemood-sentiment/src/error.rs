use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("no videos to analyze")]
    NoVideos,

    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
