use serde::Deserialize;
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file. Every field is optional;
/// unset values fall through to the defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub search: FileSearchConfig,
    #[serde(default)]
    pub display: FileDisplayConfig,
    #[serde(default)]
    pub session: FileSessionConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileApiConfig {
    pub base_url: Option<String>,
    pub products_path: Option<String>,
    pub auth_header: Option<String>,
    /// humantime string, e.g. `"30s"`
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSearchConfig {
    /// humantime string, e.g. `"200ms"`
    pub debounce: Option<String>,
    pub min_query_chars: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileDisplayConfig {
    pub description_preview_chars: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSessionConfig {
    pub path: Option<PathBuf>,
}
