use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use reqwest::header::HeaderName;
use reqwest::{Client, RequestBuilder};
use stocklist_config::ApiConfig;
use stocklist_model::Product;

use crate::infra::services::products::{FetchError, ProductSource};
use crate::infra::session::SessionStore;

const ERROR_BODY_PREVIEW: usize = 200;

/// Catalog API client with bearer-token authentication
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    products_url: String,
    auth_header: HeaderName,
    session: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("products_url", &self.products_url)
            .field("auth_header", &self.auth_header)
            .field("session", &self.session)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client. `config.base_url` is expected to be
    /// normalized already (see `stocklist_config::finalize`).
    pub fn new(config: &ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self, FetchError> {
        let auth_header = HeaderName::from_bytes(config.auth_header.as_bytes())
            .map_err(|_| FetchError::InvalidHeader(config.auth_header.clone()))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;
        let products_url = config.products_url();

        info!("[ApiClient] Products endpoint: {}", products_url);

        Ok(Self {
            client,
            products_url,
            auth_header,
            session,
        })
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }

    /// Attach `<auth header>: Bearer <token>` when the session has a token.
    /// A missing or unreadable token sends the request unauthenticated.
    fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.access_token() {
            Ok(Some(token)) => builder.header(self.auth_header.clone(), format!("Bearer {token}")),
            Ok(None) => {
                warn!("[ApiClient] No access token in session, requesting unauthenticated");
                builder
            }
            Err(err) => {
                warn!("[ApiClient] Could not read session ({err}), requesting unauthenticated");
                builder
            }
        }
    }
}

#[async_trait]
impl ProductSource for ApiClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let request = self.build_request(self.client.get(&self.products_url));
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            return Err(FetchError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let products = decode_products(&bytes)?;
        info!("[ApiClient] Received {} products", products.len());
        Ok(products)
    }
}

/// Decode the product array record by record. A record that cannot be
/// decoded is logged and skipped; only a body that is not a JSON array
/// fails the whole fetch.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>, serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    let total = records.len();
    let products: Vec<Product> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(product) => Some(product),
            Err(err) => {
                warn!("[ApiClient] Skipping product record {index}: {err}");
                None
            }
        })
        .collect();
    if products.len() < total {
        warn!(
            "[ApiClient] Dropped {} of {} product records",
            total - products.len(),
            total
        );
    }
    Ok(products)
}
