#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use serde_json::{Value, json};
use stocklist_client::infra::{FetchError, ProductSource};
use stocklist_model::Product;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Catalog sample covering accents, a missing price and low stock.
pub fn sample_json() -> Value {
    json!([
        {
            "_id": "p1",
            "productID": "SP001",
            "name": "Áo thun",
            "prices": { "price": 150000 },
            "stock": 2,
            "warningLevel": 5,
            "productInfo": { "description": "Áo thun cotton 100% thoáng mát, phù hợp mặc hằng ngày và đi chơi cuối tuần" }
        },
        {
            "_id": "p2",
            "productID": "SP002",
            "name": "Quần jean",
            "prices": { "price": 320000 },
            "stock": 10,
            "warningLevel": 3,
            "productInfo": { "description": "Quần jean xanh" }
        },
        {
            "_id": "p3",
            "productID": "SP003",
            "name": "Áo khoác gió",
            "prices": { "price": 450000 },
            "stock": 1,
            "warningLevel": 4
        },
        {
            "_id": "p4",
            "productID": "GT004",
            "name": "Giày thể thao",
            "stock": 7,
            "warningLevel": 2
        }
    ])
}

pub fn sample_products() -> Vec<Product> {
    serde_json::from_value(sample_json()).expect("sample decodes")
}

pub fn names(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

/// In-memory product source with an optional artificial latency.
#[derive(Debug, Clone)]
pub struct StubSource {
    products: Vec<Product>,
    latency: Duration,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl StubSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            latency: Duration::ZERO,
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductSource for StubSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.fail {
            return Err(FetchError::Status {
                status: reqwest::StatusCode::UNAUTHORIZED,
                body: "token expired".to_string(),
            });
        }
        Ok(self.products.clone())
    }
}

/// Serve `router` on an ephemeral local port; returns the base URL.
pub async fn serve(router: Router) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    (format!("http://{addr}"), handle)
}
