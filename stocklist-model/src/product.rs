//! Product records as served by the catalog API.
//!
//! Field names follow the API's JSON wire format (`_id`, `productID`,
//! `warningLevel`, nested `prices` / `productInfo`). Records with missing
//! or `null` fields still deserialize: absent prices become `None`, absent
//! descriptions become empty, absent counters become `0`. Only `_id` is
//! required.

use crate::ids::ProductId;

/// A single catalog entry. Read-only from the client's point of view.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Product {
    #[cfg_attr(feature = "serde", serde(rename = "_id"))]
    pub id: ProductId,
    /// Human-facing product code, searchable.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "productID", default, deserialize_with = "crate::wire::null_as_default")
    )]
    pub product_code: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::wire::null_as_default")
    )]
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::wire::null_as_default")
    )]
    pub prices: Prices,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::wire::null_as_default")
    )]
    pub stock: i64,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::wire::null_as_default")
    )]
    pub warning_level: i64,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::wire::null_as_default")
    )]
    pub product_info: ProductInfo,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prices {
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductInfo {
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        product_code: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product_code: product_code.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.prices.price = Some(price);
        self
    }

    pub fn with_stock(mut self, stock: i64, warning_level: i64) -> Self {
        self.stock = stock;
        self.warning_level = warning_level;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.product_info.description = Some(description.into());
        self
    }

    pub fn price(&self) -> Option<f64> {
        self.prices.price
    }

    pub fn description(&self) -> &str {
        self.product_info.description.as_deref().unwrap_or_default()
    }

    /// Stock has dropped below the configured warning threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.warning_level
    }
}
