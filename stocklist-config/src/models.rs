use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PRODUCTS_PATH: &str = "/v1/app/products/";
pub const DEFAULT_AUTH_HEADER: &str = "token";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);
pub const DEFAULT_MIN_QUERY_CHARS: usize = 3;
pub const DEFAULT_DESCRIPTION_PREVIEW_CHARS: usize = 50;
pub const MAX_DEBOUNCE: Duration = Duration::from_secs(10);

/// Fully resolved client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub display: DisplayConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host (+ optional prefix), no trailing slash
    pub base_url: String,
    pub products_path: String,
    /// Header carrying `Bearer <token>`
    pub auth_header: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            products_path: DEFAULT_PRODUCTS_PATH.to_string(),
            auth_header: DEFAULT_AUTH_HEADER.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Absolute URL of the products collection.
    pub fn products_url(&self) -> String {
        let path = self.products_path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub debounce: Duration,
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub description_preview_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            description_preview_chars: DEFAULT_DESCRIPTION_PREVIEW_CHARS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Persisted session file; platform data dir when unset
    pub path: Option<PathBuf>,
}
