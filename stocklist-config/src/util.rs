use std::time::Duration;

use crate::loader::error::ConfigLoadError;

/// Add `http://` when the scheme is missing and drop trailing slashes.
///
/// Users commonly provide `localhost:8000`, which reqwest rejects.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    if with_scheme != raw {
        log::warn!("Normalized base URL from '{}' to '{}'", raw, with_scheme);
    }
    with_scheme
}

pub fn parse_duration_value(key: &str, value: &str) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(value.trim()).map_err(|source| ConfigLoadError::InvalidDuration {
        key: key.to_string(),
        value: value.to_string(),
        source,
    })
}

pub fn parse_count_value(key: &str, value: &str) -> Result<usize, ConfigLoadError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|source| ConfigLoadError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
}
