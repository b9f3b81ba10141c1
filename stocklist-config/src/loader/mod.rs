//! Resolve a [`ClientConfig`] from defaults, an optional TOML file and the
//! environment.

pub mod error;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use self::error::ConfigLoadError;
use crate::models::{ClientConfig, MAX_DEBOUNCE};
use crate::sources::FileConfig;
use crate::util::{normalize_base_url, parse_count_value, parse_duration_value};

pub const ENV_API_URL: &str = "STOCKLIST_API_URL";
pub const ENV_PRODUCTS_PATH: &str = "STOCKLIST_PRODUCTS_PATH";
pub const ENV_AUTH_HEADER: &str = "STOCKLIST_AUTH_HEADER";
pub const ENV_HTTP_TIMEOUT: &str = "STOCKLIST_HTTP_TIMEOUT";
pub const ENV_DEBOUNCE: &str = "STOCKLIST_DEBOUNCE";
pub const ENV_MIN_QUERY_CHARS: &str = "STOCKLIST_MIN_QUERY_CHARS";
pub const ENV_PREVIEW_CHARS: &str = "STOCKLIST_DESCRIPTION_PREVIEW_CHARS";
pub const ENV_SESSION_FILE: &str = "STOCKLIST_SESSION_FILE";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Builder for loading configuration.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this TOML file instead of the platform default. The file must
    /// exist.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Load this dotenv file instead of searching for `.env`.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Platform default location, e.g. `~/.config/stocklist/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "stocklist")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load `.env`, then resolve against the process environment.
    pub fn load(&self) -> Result<ClientConfig, ConfigLoadError> {
        match &self.env_file {
            Some(path) => {
                dotenvy::from_path(path)?;
            }
            None => match dotenvy::dotenv() {
                Ok(path) => log::debug!("Loaded environment from {}", path.display()),
                Err(err) if err.not_found() => {}
                Err(err) => return Err(err.into()),
            },
        }
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup. Does not touch `.env`.
    pub fn load_with_env<F>(&self, env: F) -> Result<ClientConfig, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = self.read_file_config()?;
        let mut config = ClientConfig::default();
        apply_file(&mut config, file)?;
        apply_env(&mut config, &env)?;
        finalize(config)
    }

    fn read_file_config(&self) -> Result<FileConfig, ConfigLoadError> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(FileConfig::default()),
            },
        };
        read_toml(&path)
    }
}

fn read_toml(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::ConfigFileIo {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = toml::from_str(&raw).map_err(|source| ConfigLoadError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded config file {}", path.display());
    Ok(parsed)
}

fn apply_file(config: &mut ClientConfig, file: FileConfig) -> Result<(), ConfigLoadError> {
    if let Some(url) = file.api.base_url {
        config.api.base_url = url;
    }
    if let Some(path) = file.api.products_path {
        config.api.products_path = path;
    }
    if let Some(header) = file.api.auth_header {
        config.api.auth_header = header;
    }
    if let Some(timeout) = file.api.timeout {
        config.api.timeout = parse_duration_value("api.timeout", &timeout)?;
    }
    if let Some(debounce) = file.search.debounce {
        config.search.debounce = parse_duration_value("search.debounce", &debounce)?;
    }
    if let Some(min) = file.search.min_query_chars {
        config.search.min_query_chars = min;
    }
    if let Some(chars) = file.display.description_preview_chars {
        config.display.description_preview_chars = chars;
    }
    if let Some(path) = file.session.path {
        config.session.path = Some(path);
    }
    Ok(())
}

fn apply_env<F>(config: &mut ClientConfig, env: &F) -> Result<(), ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = env(ENV_API_URL) {
        config.api.base_url = url;
    }
    if let Some(path) = env(ENV_PRODUCTS_PATH) {
        config.api.products_path = path;
    }
    if let Some(header) = env(ENV_AUTH_HEADER) {
        config.api.auth_header = header;
    }
    if let Some(timeout) = env(ENV_HTTP_TIMEOUT) {
        config.api.timeout = parse_duration_value(ENV_HTTP_TIMEOUT, &timeout)?;
    }
    if let Some(debounce) = env(ENV_DEBOUNCE) {
        config.search.debounce = parse_duration_value(ENV_DEBOUNCE, &debounce)?;
    }
    if let Some(min) = env(ENV_MIN_QUERY_CHARS) {
        config.search.min_query_chars = parse_count_value(ENV_MIN_QUERY_CHARS, &min)?;
    }
    if let Some(chars) = env(ENV_PREVIEW_CHARS) {
        config.display.description_preview_chars = parse_count_value(ENV_PREVIEW_CHARS, &chars)?;
    }
    if let Some(path) = env(ENV_SESSION_FILE) {
        config.session.path = Some(PathBuf::from(path));
    }
    Ok(())
}

/// Normalize and validate. Also used by callers that layer CLI flags on top.
pub fn finalize(mut config: ClientConfig) -> Result<ClientConfig, ConfigLoadError> {
    config.api.base_url = normalize_base_url(&config.api.base_url);
    url::Url::parse(&config.api.base_url).map_err(|source| ConfigLoadError::InvalidBaseUrl {
        value: config.api.base_url.clone(),
        source,
    })?;

    config.api.auth_header = config.api.auth_header.trim().to_string();
    if config.api.auth_header.is_empty() {
        return Err(ConfigLoadError::EmptyAuthHeader);
    }
    if config.search.min_query_chars == 0 {
        return Err(ConfigLoadError::ZeroCount {
            key: "search.min_query_chars",
        });
    }
    if config.display.description_preview_chars == 0 {
        return Err(ConfigLoadError::ZeroCount {
            key: "display.description_preview_chars",
        });
    }
    if config.search.debounce > MAX_DEBOUNCE {
        return Err(ConfigLoadError::DebounceTooLong(config.search.debounce));
    }
    Ok(config)
}
