//! Table projection of the working dataset.
//!
//! Nothing here mutates products: ordinals are positional, descriptions are
//! shortened copies.

use stocklist_model::{Product, ProductId};

use crate::sorting::{SortColumn, SortDirection, SortToggles};

pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

/// One column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: &'static str,
    /// Set for the clickable (sortable) headers.
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl HeaderCell {
    fn plain(label: &'static str) -> Self {
        Self {
            label,
            column: None,
            direction: SortDirection::Unset,
        }
    }

    fn sortable(label: &'static str, column: SortColumn, toggles: &SortToggles) -> Self {
        Self {
            label,
            column: Some(column),
            direction: toggles.get(column),
        }
    }

    /// Label with the toggle arrow appended, e.g. `"Price ↑"`.
    pub fn title(&self) -> String {
        match self.direction.arrow() {
            "" => self.label.to_string(),
            arrow => format!("{} {}", self.label, arrow),
        }
    }
}

/// One render-ready row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 1-based position in the current working dataset.
    pub ordinal: usize,
    pub id: ProductId,
    pub product_code: String,
    pub name: String,
    /// Display form, `-` when the product has no price.
    pub price: String,
    /// Preview, cut to the configured length plus `...`.
    pub description: String,
    pub stock: i64,
    pub warning_level: i64,
    /// `stock < warning_level`
    pub low_stock: bool,
}

impl TableRow {
    pub fn from_product(ordinal: usize, product: &Product, preview_chars: usize) -> Self {
        Self {
            ordinal,
            id: product.id.clone(),
            product_code: product.product_code.clone(),
            name: product.name.clone(),
            price: format_price(product.price()),
            description: truncate_description(product.description(), preview_chars),
            stock: product.stock,
            warning_level: product.warning_level,
            low_stock: product.is_low_stock(),
        }
    }
}

/// Headers plus rows for one render of the working dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<TableRow>,
}

impl TableModel {
    /// Project `products` in their current order; ordinals start at 1.
    pub fn build(products: &[Product], toggles: &SortToggles, preview_chars: usize) -> Self {
        let headers = vec![
            HeaderCell::plain("#"),
            HeaderCell::plain("Code"),
            HeaderCell::sortable("Name", SortColumn::Name, toggles),
            HeaderCell::sortable("Price", SortColumn::Price, toggles),
            HeaderCell::plain("Description"),
            HeaderCell::sortable("Stock", SortColumn::Stock, toggles),
            HeaderCell::plain("Warning level"),
        ];

        let rows = products
            .iter()
            .enumerate()
            .map(|(idx, product)| TableRow::from_product(idx + 1, product, preview_chars))
            .collect();

        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// First `limit` characters plus `...` when `text` is longer than `limit`.
pub fn truncate_description(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => price.to_string(),
        None => "-".to_string(),
    }
}
