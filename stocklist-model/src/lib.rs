//! Product catalog data model shared across stocklist crates.
#![allow(missing_docs)]

pub mod ids;
pub mod product;
#[cfg(feature = "serde")]
mod wire;

pub use ids::ProductId;
pub use product::{Prices, Product, ProductInfo};
