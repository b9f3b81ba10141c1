use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}")]
    ConfigFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid API base URL '{value}'")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid duration for {key}: '{value}'")]
    InvalidDuration {
        key: String,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("invalid number for {key}: '{value}'")]
    InvalidNumber {
        key: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("{key} must be at least 1")]
    ZeroCount { key: &'static str },
    #[error("debounce of {0:?} exceeds the 10s limit")]
    DebounceTooLong(Duration),
    #[error("auth header name must not be empty")]
    EmptyAuthHeader,
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
