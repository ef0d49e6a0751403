use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A top-level comment as fetched from the video platform.
///
/// Every text field is defaulted to the empty string at the API boundary, so a
/// `Comment` never carries missing data, only empty data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub video_id: String,
    pub author: String,
    pub text: String,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels in report order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Cut-offs that map a compound score onto a [`SentimentLabel`].
///
/// Both bounds are inclusive: a score equal to `positive` is positive and a
/// score equal to `negative` is negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub positive: f32,
    pub negative: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.05,
            negative: -0.05,
        }
    }
}

impl Thresholds {
    /// Build thresholds, rejecting a negative bound above the positive one.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidThresholds`] if `negative > positive` or
    /// either value is not finite.
    pub fn new(positive: f32, negative: f32) -> Result<Self, CoreError> {
        if !positive.is_finite() || !negative.is_finite() || negative > positive {
            return Err(CoreError::InvalidThresholds { positive, negative });
        }
        Ok(Self { positive, negative })
    }

    #[must_use]
    pub fn label(&self, score: f32) -> SentimentLabel {
        if score >= self.positive {
            SentimentLabel::Positive
        } else if score <= self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// A [`Comment`] after normalization and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredComment {
    #[serde(flatten)]
    pub comment: Comment,
    pub normalized: String,
    /// Compound score in `[-1.0, 1.0]`.
    pub score: f32,
    pub label: SentimentLabel,
}

/// Per-video counts derived from the current scored collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoAggregate {
    pub video_id: String,
    pub comment_count: usize,
    pub author_count: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// Drop repeated comments, keeping the first occurrence of each id.
///
/// Comments with an empty id carry no identity and are always kept.
#[must_use]
pub fn dedupe_comments(mut comments: Vec<Comment>) -> Vec<Comment> {
    let mut seen: HashSet<String> = HashSet::new();
    comments.retain(|c| c.id.is_empty() || seen.insert(c.id.clone()));
    comments
}
