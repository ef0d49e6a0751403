//! Valence lexicon for comment scoring.
//!
//! Valences use the `[-4.0, 4.0]` scale of rule-based social media analyzers.
//! Entries cover general English comment vocabulary plus the Indonesian words
//! that dominate public-service video comments (queues, service speed,
//! system errors). Keys are lowercase single words.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

pub(crate) const LEXICON: &[(&str, f32)] = &[
    // English, positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("clean", 1.7),
    ("clear", 1.6),
    ("comfortable", 1.8),
    ("convenient", 1.8),
    ("cool", 1.3),
    ("easy", 1.9),
    ("efficient", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("fast", 1.4),
    ("fine", 0.8),
    ("friendly", 2.2),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.9),
    ("impressive", 2.3),
    ("informative", 1.5),
    ("like", 1.5),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("polite", 1.8),
    ("professional", 1.4),
    ("quick", 1.3),
    ("recommend", 1.5),
    ("recommended", 1.6),
    ("satisfied", 1.8),
    ("smooth", 1.5),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("useful", 1.9),
    ("welcome", 2.0),
    ("wonderful", 2.7),
    ("wow", 2.8),
    // English, negative
    ("angry", -2.3),
    ("annoying", -1.7),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("broken", -1.6),
    ("complicated", -1.1),
    ("confusing", -1.3),
    ("corrupt", -3.0),
    ("crash", -1.7),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("dislike", -1.6),
    ("down", -0.6),
    ("error", -1.7),
    ("expensive", -1.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fraud", -2.8),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("lazy", -1.5),
    ("long", -0.3),
    ("mess", -1.5),
    ("poor", -2.1),
    ("problem", -1.7),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scam", -2.6),
    ("slow", -1.2),
    ("stupid", -2.4),
    ("terrible", -2.5),
    ("ugly", -2.3),
    ("unfair", -2.1),
    ("useless", -1.8),
    ("waste", -1.8),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    // Indonesian, positive
    ("bagus", 2.0),
    ("baik", 1.8),
    ("bersih", 1.6),
    ("cepat", 1.5),
    ("gampang", 1.6),
    ("hebat", 2.5),
    ("jelas", 1.2),
    ("keren", 2.2),
    ("makasih", 1.8),
    ("mantap", 2.6),
    ("mantab", 2.6),
    ("membantu", 1.9),
    ("memuaskan", 2.3),
    ("mudah", 1.7),
    ("nyaman", 1.9),
    ("puas", 2.1),
    ("ramah", 2.1),
    ("rapi", 1.4),
    ("senang", 2.2),
    ("suka", 1.8),
    ("sukses", 2.3),
    ("terbaik", 3.0),
    ("terimakasih", 1.8),
    ("top", 1.7),
    // Indonesian, negative
    ("antre", -0.6),
    ("antri", -0.6),
    ("antrian", -0.7),
    ("bohong", -2.3),
    ("buruk", -2.4),
    ("gangguan", -1.6),
    ("jelek", -2.3),
    ("kecewa", -2.3),
    ("kesal", -2.0),
    ("korupsi", -3.0),
    ("lambat", -1.7),
    ("lelet", -1.9),
    ("mahal", -1.3),
    ("marah", -2.3),
    ("parah", -2.1),
    ("pungli", -2.8),
    ("ribet", -1.8),
    ("rusak", -1.9),
    ("susah", -1.6),
    ("telat", -1.4),
];

/// Words that amplify the valence of the word they modify.
pub(crate) const BOOSTERS: &[&str] = &[
    "absolutely",
    "completely",
    "extremely",
    "highly",
    "incredibly",
    "really",
    "so",
    "super",
    "totally",
    "very",
    "amat",
    "paling",
    "sangat",
    "sungguh",
    "terlalu",
];

/// Indonesian intensifiers that follow the word they modify.
pub(crate) const POST_BOOSTERS: &[&str] = &["banget", "bgt", "sekali"];

/// Words that soften the valence of the word they modify.
pub(crate) const DAMPENERS: &[&str] = &[
    "barely",
    "hardly",
    "kinda",
    "slightly",
    "somewhat",
    "agak",
    "lumayan",
];

pub(crate) const NEGATIONS: &[&str] = &[
    "aint",
    "cannot",
    "cant",
    "dont",
    "doesnt",
    "didnt",
    "isnt",
    "never",
    "no",
    "nobody",
    "none",
    "not",
    "nothing",
    "wasnt",
    "wont",
    "belum",
    "bukan",
    "ga",
    "gak",
    "jangan",
    "kurang",
    "nggak",
    "tak",
    "tdk",
    "tidak",
];

/// Contrastive conjunctions: the clause after one outweighs the clause before.
pub(crate) const CONTRASTS: &[&str] = &["but", "however", "namun", "tapi", "tetapi"];

pub(crate) static VALENCE: LazyLock<HashMap<&'static str, f32>> =
    LazyLock::new(|| LEXICON.iter().copied().collect());

pub(crate) static BOOSTER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BOOSTERS.iter().copied().collect());

pub(crate) static DAMPENER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DAMPENERS.iter().copied().collect());

pub(crate) static NEGATION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIONS.iter().copied().collect());
