//! Comment sentiment pipeline for tubemood.
//!
//! Normalizes comment text, scores it with a fixed valence lexicon, labels it
//! by threshold, and aggregates the scored set per label and per video.

pub mod aggregate;
pub mod error;
pub mod export;
pub mod normalize;
pub mod pipeline;
pub mod scorer;

mod lexicon;

pub use aggregate::{aggregate, LabelBreakdown, SentimentSummary, TokenCount};
pub use error::SentimentError;
pub use export::{write_csv, write_json};
pub use normalize::{normalize_text, normalize_value};
pub use pipeline::{analyze, run_pipeline, PipelineConfig, PipelineReport};
pub use scorer::{compound_score, score_all, score_comment};
