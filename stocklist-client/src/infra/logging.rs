//! Logger setup for the `stocklist` binary.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use env_logger::{Builder, Target};
use log::LevelFilter;

#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    /// Appends to a file; used while the terminal UI owns the screen.
    File(PathBuf),
}

impl LogTarget {
    /// `<data dir>/stocklist.log`, falling back to stderr.
    pub fn default_file() -> Self {
        match ProjectDirs::from("", "", "stocklist") {
            Some(dirs) => LogTarget::File(dirs.data_dir().join("stocklist.log")),
            None => LogTarget::Stderr,
        }
    }
}

/// `RUST_LOG` wins when set; otherwise warn globally and info for our crates.
pub fn init_logger(target: LogTarget) -> Result<()> {
    let mut builder = if std::env::var("RUST_LOG").is_ok() {
        Builder::from_default_env()
    } else {
        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("stocklist", LevelFilter::Info)
            .filter_module("stocklist_client", LevelFilter::Info)
            .filter_module("stocklist_core", LevelFilter::Info)
            .filter_module("stocklist_config", LevelFilter::Info);
        builder
    };

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }

    builder.try_init().context("initialize logger")
}
