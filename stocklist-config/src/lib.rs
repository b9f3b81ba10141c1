//! Configuration for the stocklist client.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `STOCKLIST_*` environment variables (a `.env` file is honored). Command
//! line flags are applied on top by the binary.

pub mod loader;
pub mod models;
pub mod sources;
pub mod util;

pub use loader::{ConfigLoader, error::ConfigLoadError, finalize};
pub use models::{ApiConfig, ClientConfig, DisplayConfig, SearchConfig, SessionConfig};
pub use sources::FileConfig;
