//! Client for the YouTube Data API v3 `commentThreads` endpoint.
//!
//! Pages through top-level comments per video, decodes loosely typed records
//! into [`tubemood_core::Comment`], and fetches whole video lists with
//! per-video soft failure and optional TTL caching.

pub mod batch;
pub mod cache;
pub mod client;
pub mod error;
mod types;

pub use batch::{BatchFetch, VideoReport};
pub use cache::CommentCache;
pub use client::{CommentPage, FetchLimits, VideoFetch, YoutubeClient};
pub use error::YoutubeError;
