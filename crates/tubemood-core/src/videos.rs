use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::video_id::parse_video_id;
use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoEntry {
    pub url: String,
    pub label: Option<String>,
}

impl VideoEntry {
    /// Resolve the entry's URL to a bare video id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the URL holds no video id.
    pub fn video_id(&self) -> Result<String, ConfigError> {
        parse_video_id(&self.url).map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct VideosFile {
    pub videos: Vec<VideoEntry>,
}

impl VideosFile {
    /// Resolved video ids in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any entry fails to resolve.
    pub fn video_ids(&self) -> Result<Vec<String>, ConfigError> {
        self.videos.iter().map(VideoEntry::video_id).collect()
    }
}

/// Load and validate the video list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_videos(path: &Path) -> Result<VideosFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VideosFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let videos_file: VideosFile =
        serde_yaml::from_str(&content).map_err(ConfigError::VideosFileParse)?;

    validate_videos(&videos_file)?;

    Ok(videos_file)
}

fn validate_videos(videos_file: &VideosFile) -> Result<(), ConfigError> {
    if videos_file.videos.is_empty() {
        return Err(ConfigError::Validation(
            "video list must contain at least one entry".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for entry in &videos_file.videos {
        let id = entry.video_id()?;
        if !seen_ids.insert(id.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate video id '{id}' (from '{}')",
                entry.url
            )));
        }
    }

    Ok(())
}
