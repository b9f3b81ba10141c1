//! Command line surface and startup wiring.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use stocklist_config::{ClientConfig, ConfigLoader, finalize};
use stocklist_core::{SortColumn, ViewSettings};

use crate::domains::catalog::CatalogController;
use crate::infra::api_client::ApiClient;
use crate::infra::navigation::RouteNavigator;
use crate::infra::services::products::ProductSource;
use crate::infra::session::{FileSessionStore, MemorySessionStore, SessionStore};

/// CLI entry point
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "stocklist")]
#[command(about = "Browse, search and sort the product catalog")]
pub struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Load environment variables from this file instead of ./.env
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Catalog API base URL (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Access token to send instead of the persisted session
    #[arg(long)]
    pub token: Option<String>,

    /// Session file holding `accessToken` (overrides config)
    #[arg(long)]
    pub session_file: Option<PathBuf>,

    /// Print the table once and exit instead of starting the terminal UI
    #[arg(long, default_value_t = false)]
    pub print: bool,

    /// Search text applied before printing
    #[arg(short, long, requires = "print")]
    pub query: Option<String>,

    /// Column header clicks applied in order before printing (name, price, stock)
    #[arg(long = "sort", requires = "print")]
    pub sorts: Vec<SortColumn>,

    /// Log file used while the terminal UI is running
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Layer CLI overrides over file/env config and validate the result.
pub fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let mut config = loader.load().context("load configuration")?;

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(path) = &cli.session_file {
        config.session.path = Some(path.clone());
    }

    finalize(config).context("validate command line overrides")
}

pub fn session_store(cli: &Cli, config: &ClientConfig) -> Result<Arc<dyn SessionStore>> {
    if let Some(token) = &cli.token {
        return Ok(Arc::new(MemorySessionStore::new(Some(token.clone()))));
    }
    let store = match &config.session.path {
        Some(path) => FileSessionStore::new(path),
        None => FileSessionStore::at_default_location().context("locate session file")?,
    };
    log::debug!("Reading access token from {}", store.path().display());
    Ok(Arc::new(store))
}

pub fn view_settings(config: &ClientConfig) -> ViewSettings {
    ViewSettings {
        debounce: config.search.debounce,
        min_query_chars: config.search.min_query_chars,
        description_preview_chars: config.display.description_preview_chars,
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let session = session_store(&cli, &config)?;
    let client = ApiClient::new(&config.api, session).context("build HTTP client")?;
    log::info!("Fetching products from {}", client.products_url());

    let source: Arc<dyn ProductSource> = Arc::new(client);
    let settings = view_settings(&config);

    if cli.print {
        let mut controller =
            CatalogController::mounted(settings, source, Arc::new(RouteNavigator::new()));
        let stdout = io::stdout();
        let mut out = stdout.lock();
        crate::print::run_print(&mut controller, cli.query.as_deref(), &cli.sorts, &mut out).await
    } else {
        crate::tui::run_tui(settings, source).await
    }
}
