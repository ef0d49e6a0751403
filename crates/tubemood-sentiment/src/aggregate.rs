//! Label, video and token aggregation over a scored comment set.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

use tubemood_core::{ScoredComment, SentimentLabel, VideoAggregate};

const MIN_TOKEN_CHARS: usize = 3;

/// Filler words left out of the top-token list (English and Indonesian).
const STOPWORDS: &[&str] = &[
    "about", "after", "again", "all", "also", "and", "any", "are", "because", "been", "but",
    "can", "could", "did", "does", "for", "from", "get", "had", "has", "have", "her", "his",
    "how", "its", "just", "more", "not", "now", "one", "only", "our", "out", "she", "should",
    "some", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "too", "very", "was", "were", "what", "when", "where", "which", "who", "why", "will",
    "with", "would", "you", "your", "ada", "adalah", "agar", "aja", "akan", "aku", "bisa",
    "buat", "dan", "dari", "dengan", "deh", "dia", "gak", "harus", "ini", "itu", "jadi",
    "juga", "kalau", "kalo", "kami", "kamu", "karena", "kita", "lagi", "mau", "nya", "oleh",
    "pada", "para", "saja", "saya", "sih", "sudah", "tapi", "untuk", "udah", "yang",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Count and share of each label. Percentages are in `[0.0, 100.0]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabelBreakdown {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
}

impl LabelBreakdown {
    fn from_counts(positive: usize, negative: usize, neutral: usize) -> Self {
        let total = positive + negative + neutral;
        Self {
            positive,
            negative,
            neutral,
            positive_pct: percent(positive, total),
            negative_pct: percent(negative, total),
            neutral_pct: percent(neutral, total),
        }
    }

    #[must_use]
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    #[must_use]
    pub fn percent(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive_pct,
            SentimentLabel::Negative => self.negative_pct,
            SentimentLabel::Neutral => self.neutral_pct,
        }
    }

    /// The most frequent label; ties go to the earlier label in
    /// [`SentimentLabel::ALL`]. `None` when nothing was counted.
    #[must_use]
    pub fn dominant(&self) -> Option<SentimentLabel> {
        let mut best: Option<(SentimentLabel, usize)> = None;
        for label in SentimentLabel::ALL {
            let n = self.count(label);
            if n > 0 && best.map_or(true, |(_, top)| n > top) {
                best = Some((label, n));
            }
        }
        best.map(|(label, _)| label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

/// Everything the report renders, derived from one scored collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub total_comments: usize,
    pub total_authors: usize,
    pub total_videos: usize,
    pub latest_published: Option<DateTime<Utc>>,
    /// Mean compound score; `0.0` for an empty collection.
    pub mean_score: f32,
    pub labels: LabelBreakdown,
    /// One entry per video, ordered by video id.
    pub videos: Vec<VideoAggregate>,
    pub top_tokens: Vec<TokenCount>,
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

fn bump(aggregate: &mut VideoAggregate, label: SentimentLabel) {
    match label {
        SentimentLabel::Positive => aggregate.positive += 1,
        SentimentLabel::Negative => aggregate.negative += 1,
        SentimentLabel::Neutral => aggregate.neutral += 1,
    }
}

/// Lowercased content words of `text`, with stopwords, digits and short
/// words removed.
fn content_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|w| !w.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_lowercase)
        .filter(|w| !STOPWORD_SET.contains(w.as_str()))
}

/// Aggregate a scored collection into label, per-video and token statistics.
///
/// Pure over its input. The empty collection yields zero counts and zero
/// percentages. `top_n` bounds the token list; ties are ordered alphabetically.
#[must_use]
pub fn aggregate(comments: &[ScoredComment], top_n: usize) -> SentimentSummary {
    let mut authors: HashSet<&str> = HashSet::new();
    let mut per_video: BTreeMap<&str, (VideoAggregate, HashSet<&str>)> = BTreeMap::new();
    let mut tokens: HashMap<String, usize> = HashMap::new();
    let (mut positive, mut negative, mut neutral) = (0_usize, 0_usize, 0_usize);
    let mut score_sum = 0.0_f64;
    let mut latest: Option<DateTime<Utc>> = None;

    for scored in comments {
        let comment = &scored.comment;
        match scored.label {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Negative => negative += 1,
            SentimentLabel::Neutral => neutral += 1,
        }
        score_sum += f64::from(scored.score);
        authors.insert(comment.author.as_str());
        latest = latest.max(comment.published_at);

        let (video, video_authors) = per_video
            .entry(comment.video_id.as_str())
            .or_insert_with(|| {
                (
                    VideoAggregate {
                        video_id: comment.video_id.clone(),
                        ..VideoAggregate::default()
                    },
                    HashSet::new(),
                )
            });
        video.comment_count += 1;
        bump(video, scored.label);
        video_authors.insert(comment.author.as_str());

        for token in content_tokens(&scored.normalized) {
            *tokens.entry(token).or_insert(0) += 1;
        }
    }

    let videos: Vec<VideoAggregate> = per_video
        .into_values()
        .map(|(mut video, video_authors)| {
            video.author_count = video_authors.len();
            video
        })
        .collect();

    let mut top_tokens: Vec<TokenCount> = tokens
        .into_iter()
        .map(|(token, count)| TokenCount { token, count })
        .collect();
    top_tokens.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    top_tokens.truncate(top_n);

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let mean_score = if comments.is_empty() {
        0.0
    } else {
        (score_sum / comments.len() as f64) as f32
    };

    SentimentSummary {
        total_comments: comments.len(),
        total_authors: authors.len(),
        total_videos: videos.len(),
        latest_published: latest,
        mean_score,
        labels: LabelBreakdown::from_counts(positive, negative, neutral),
        videos,
        top_tokens,
    }
}
