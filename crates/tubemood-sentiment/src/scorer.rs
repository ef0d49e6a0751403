//! Rule-based compound polarity scorer.
//!
//! Sums lexicon valences with the usual heuristics for short social text
//! (negation, intensifiers, capitalised emphasis, exclamation marks and
//! contrastive "but" clauses), then squashes the sum into `[-1.0, 1.0]`.

use tubemood_core::{Comment, ScoredComment, Thresholds};

use crate::lexicon::{
    BOOSTER_SET, CONTRASTS, DAMPENER_SET, NEGATION_SET, POST_BOOSTERS, VALENCE,
};
use crate::normalize::normalize_text;

const BOOST: f32 = 0.293;
const CAPS_INCREMENT: f32 = 0.733;
const NEGATION_SCALAR: f32 = -0.74;
const EXCLAMATION_BOOST: f32 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Approximate maximum expected sum; controls how fast the score saturates.
const ALPHA: f32 = 15.0;
/// Modifier weight by distance (1, 2, 3 words back).
const DISTANCE_DECAY: [f32; 3] = [1.0, 0.95, 0.9];

struct Token<'a> {
    raw: &'a str,
    key: String,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .filter_map(|word| {
            let raw = word.trim_matches(|c: char| !c.is_alphanumeric());
            let key: String = raw
                .chars()
                .filter(|c| *c != '\'' && *c != '\u{2019}')
                .flat_map(char::to_lowercase)
                .collect();
            (!key.is_empty()).then_some(Token { raw, key })
        })
        .collect()
}

fn is_shouted(raw: &str) -> bool {
    let letters: Vec<char> = raw.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
}

fn squash(sum: f32) -> f32 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Compound polarity of `text` in `[-1.0, 1.0]`.
///
/// Expects normalized text. Returns `0.0` for empty text or text without any
/// lexicon word.
#[must_use]
pub fn compound_score(text: &str) -> f32 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let shouted = tokens.iter().filter(|t| is_shouted(t.raw)).count();
    let caps_differential = shouted > 0 && shouted < tokens.len();

    let mut valences = vec![0.0_f32; tokens.len()];
    for (i, token) in tokens.iter().enumerate() {
        let Some(&base) = VALENCE.get(token.key.as_str()) else {
            continue;
        };
        let direction = base.signum();
        let mut valence = base;

        if caps_differential && is_shouted(token.raw) {
            valence += direction * CAPS_INCREMENT;
        }

        let window = i.saturating_sub(DISTANCE_DECAY.len())..i;
        let negated = window
            .clone()
            .any(|j| NEGATION_SET.contains(tokens[j].key.as_str()));
        for (distance, j) in window.rev().enumerate() {
            let modifier = tokens[j].key.as_str();
            if BOOSTER_SET.contains(modifier) {
                valence += direction * BOOST * DISTANCE_DECAY[distance];
            } else if DAMPENER_SET.contains(modifier) {
                valence -= direction * BOOST * DISTANCE_DECAY[distance];
            }
        }

        if tokens
            .get(i + 1)
            .is_some_and(|next| POST_BOOSTERS.contains(&next.key.as_str()))
        {
            valence += direction * BOOST;
        }

        if negated {
            valence *= NEGATION_SCALAR;
        }

        valences[i] = valence;
    }

    if let Some(pivot) = tokens
        .iter()
        .position(|t| CONTRASTS.contains(&t.key.as_str()))
    {
        for (i, valence) in valences.iter_mut().enumerate() {
            if i < pivot {
                *valence *= 0.5;
            } else if i > pivot {
                *valence *= 1.5;
            }
        }
    }

    let mut sum: f32 = valences.iter().sum();
    if sum != 0.0 {
        let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS);
        #[allow(clippy::cast_precision_loss)]
        let emphasis = bangs as f32 * EXCLAMATION_BOOST;
        sum += sum.signum() * emphasis;
    }

    squash(sum)
}

/// Normalize, score and label one comment.
#[must_use]
pub fn score_comment(comment: Comment, thresholds: &Thresholds) -> ScoredComment {
    let normalized = normalize_text(&comment.text);
    let score = compound_score(&normalized);
    ScoredComment {
        label: thresholds.label(score),
        comment,
        normalized,
        score,
    }
}

#[must_use]
pub fn score_all(comments: Vec<Comment>, thresholds: &Thresholds) -> Vec<ScoredComment> {
    comments
        .into_iter()
        .map(|c| score_comment(c, thresholds))
        .collect()
}
