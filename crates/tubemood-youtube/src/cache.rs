//! Time-to-live memoization of fetched comments, keyed by video id.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tubemood_core::Comment;

#[derive(Debug)]
struct CacheEntry {
    stored_at: Instant,
    comments: Vec<Comment>,
}

/// Comment cache owned by the caller and passed into each fetch.
///
/// Entries older than the TTL are treated as absent. A zero TTL disables the
/// cache entirely: nothing is stored and every lookup misses.
#[derive(Debug)]
pub struct CommentCache {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

impl CommentCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    #[must_use]
    pub fn get(&self, video_id: &str) -> Option<&[Comment]> {
        self.get_at(video_id, Instant::now())
    }

    pub fn insert(&mut self, video_id: &str, comments: Vec<Comment>) {
        self.insert_at(video_id, comments, Instant::now());
    }

    /// Drop every expired entry.
    pub fn purge_expired(&mut self) {
        let now = Instant::now();
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.stored_at) < ttl);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_at(&self, video_id: &str, now: Instant) -> Option<&[Comment]> {
        if !self.is_enabled() {
            return None;
        }
        self.entries
            .get(video_id)
            .filter(|entry| now.saturating_duration_since(entry.stored_at) < self.ttl)
            .map(|entry| entry.comments.as_slice())
    }

    fn insert_at(&mut self, video_id: &str, comments: Vec<Comment>, now: Instant) {
        if !self.is_enabled() {
            return;
        }
        self.entries.insert(
            video_id.to_string(),
            CacheEntry {
                stored_at: now,
                comments,
            },
        );
    }
}
