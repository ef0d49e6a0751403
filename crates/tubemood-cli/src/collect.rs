//! `collect` and `videos` command handlers.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;

use tubemood_core::{load_videos, parse_video_id, AppConfig};
use tubemood_sentiment::{run_pipeline, write_csv, write_json, PipelineConfig};
use tubemood_youtube::{CommentCache, YoutubeClient};

use crate::report::write_summary;

/// Flags of the `collect` subcommand after parsing.
#[derive(Debug, Default)]
pub(crate) struct CollectOptions {
    pub videos: Vec<String>,
    pub max_pages: Option<u32>,
    pub max_results: Option<usize>,
    pub top: usize,
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

/// Resolve the videos to analyze: `--video` arguments when given, otherwise
/// the configured video list. Repeated ids are dropped, keeping first order.
///
/// # Errors
///
/// Returns an error if a reference holds no video id or the list file is
/// unreadable or invalid.
pub(crate) fn resolve_video_ids(
    cli_videos: &[String],
    videos_path: &Path,
) -> anyhow::Result<Vec<String>> {
    if cli_videos.is_empty() {
        let file = load_videos(videos_path)
            .with_context(|| format!("loading video list {}", videos_path.display()))?;
        return Ok(file.video_ids()?);
    }

    let mut ids: Vec<String> = Vec::with_capacity(cli_videos.len());
    for reference in cli_videos {
        let id = parse_video_id(reference)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Apply command-line overrides on top of the configured pipeline settings.
/// A cap of zero means unlimited.
pub(crate) fn pipeline_config(
    config: &AppConfig,
    video_ids: Vec<String>,
    options: &CollectOptions,
) -> PipelineConfig {
    let mut pipeline = PipelineConfig::from_app_config(config, video_ids);
    if let Some(pages) = options.max_pages {
        pipeline.limits.max_pages = Some(pages).filter(|&n| n > 0);
    }
    if let Some(results) = options.max_results {
        pipeline.limits.max_results = Some(results).filter(|&n| n > 0);
    }
    pipeline.top_tokens = options.top;
    pipeline
}

/// Run the full fetch, score and aggregate pipeline and print the summary.
///
/// # Errors
///
/// Returns an error if the video list cannot be resolved, the HTTP client
/// cannot be built, or an export file cannot be written. Per-video fetch
/// failures are reported in the summary, not returned.
pub(crate) async fn run_collect(config: &AppConfig, options: CollectOptions) -> anyhow::Result<()> {
    let video_ids = resolve_video_ids(&options.videos, &config.videos_path)?;
    let pipeline = pipeline_config(config, video_ids, &options);

    let mut client = YoutubeClient::build(
        &config.youtube_api_key,
        config.request_timeout_secs,
        &config.api_base_url,
        &config.user_agent,
    )?;
    if let Some((username, password)) = config.basic_auth() {
        client = client.with_basic_auth(username, password);
    }
    // One run never revisits a video, so the cache only pays off for
    // long-lived callers that reuse it across `run_pipeline` calls.
    let mut cache = CommentCache::new(Duration::from_secs(config.cache_ttl_secs));

    tracing::info!(
        videos = pipeline.video_ids.len(),
        max_pages = ?pipeline.limits.max_pages,
        max_results = ?pipeline.limits.max_results,
        "starting comment collection"
    );

    let report = run_pipeline(&pipeline, &client, &mut cache).await?;
    write_summary(&mut std::io::stdout().lock(), &report)?;

    if let Some(path) = &options.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_csv(BufWriter::new(file), &report.comments)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("wrote {} comments to {}", report.comments.len(), path.display());
    }

    if let Some(path) = &options.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_json(BufWriter::new(file), &report)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("wrote report to {}", path.display());
    }

    Ok(())
}

/// Print each entry of the video list with its resolved id.
///
/// # Errors
///
/// Returns an error if the list file is unreadable or invalid.
pub(crate) fn run_list_videos(path: &Path) -> anyhow::Result<()> {
    let file =
        load_videos(path).with_context(|| format!("loading video list {}", path.display()))?;

    println!("{:<14}{:<30}URL", "ID", "LABEL");
    for entry in &file.videos {
        let id = entry.video_id()?;
        println!(
            "{:<14}{:<30}{}",
            id,
            entry.label.as_deref().unwrap_or("-"),
            entry.url
        );
    }
    println!("{} videos", file.videos.len());

    Ok(())
}
