use crate::app_config::AppConfig;
use crate::comments::Thresholds;
use crate::ConfigError;

const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Load application configuration from environment variables already in the process.
///
/// Does NOT load `.env` files; the binary calls `dotenvy::dotenv()` first.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let optional = |var: &str| -> Option<String> { lookup(var).ok().filter(|v| !v.is_empty()) };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let value = or_default(var, default)
            .parse::<f32>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
            return Err(invalid(var, format!("{value} is outside [-1, 1]")));
        }
        Ok(value)
    };

    let youtube_api_key = require("YOUTUBE_API_KEY")?;

    let api_username = optional("TUBEMOOD_API_USERNAME");
    let api_password = optional("TUBEMOOD_API_PASSWORD");
    if api_username.is_some() && api_password.is_none() {
        return Err(ConfigError::MissingEnvVar(
            "TUBEMOOD_API_PASSWORD".to_string(),
        ));
    }

    let api_base_url = or_default("TUBEMOOD_API_BASE_URL", DEFAULT_API_BASE_URL);
    let log_level = or_default("TUBEMOOD_LOG_LEVEL", "info");
    let videos_path = PathBuf::from(or_default("TUBEMOOD_VIDEOS_PATH", "./config/videos.yaml"));

    let max_pages = Some(parse_u32("TUBEMOOD_MAX_PAGES", "1")?).filter(|&n| n > 0);
    let max_results = Some(parse_usize("TUBEMOOD_MAX_RESULTS", "100")?).filter(|&n| n > 0);
    let request_timeout_secs = parse_u64("TUBEMOOD_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TUBEMOOD_USER_AGENT", "tubemood/0.1 (comment-sentiment)");
    let cache_ttl_secs = parse_u64("TUBEMOOD_CACHE_TTL_SECS", "3600")?;

    let positive = parse_f32("TUBEMOOD_POSITIVE_THRESHOLD", "0.05")?;
    let negative = parse_f32("TUBEMOOD_NEGATIVE_THRESHOLD", "-0.05")?;
    let thresholds = Thresholds::new(positive, negative)
        .map_err(|e| invalid("TUBEMOOD_NEGATIVE_THRESHOLD", e.to_string()))?;

    Ok(AppConfig {
        youtube_api_key,
        api_username,
        api_password,
        api_base_url,
        log_level,
        videos_path,
        max_pages,
        max_results,
        request_timeout_secs,
        user_agent,
        cache_ttl_secs,
        thresholds,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
