//! Product source trait
//!
//! Abstracts the catalog API so the view runtime can be driven by stubs.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use stocklist_model::Product;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("invalid auth header name '{0}'")]
    InvalidHeader(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed product list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Supplies the full product collection, once per view mount.
#[async_trait]
pub trait ProductSource: Send + Sync + Debug {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}
