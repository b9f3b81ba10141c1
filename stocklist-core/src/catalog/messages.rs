//! Catalog view messages and effects

use std::time::Duration;

use stocklist_model::{Product, ProductId};

use crate::sorting::SortColumn;

/// Catalog view messages
#[derive(Clone, Debug)]
pub enum Message {
    // Lifecycle
    /// The view became active; requests the one fetch for this mount
    Mounted,
    /// Fetch completed with the full collection
    ProductsLoaded(Vec<Product>),
    /// Fetch failed; the view stays empty
    LoadFailed(String),

    // User actions
    /// Search input changed (raw text)
    QueryChanged(String),
    /// Column header clicked
    SortRequested(SortColumn),
    /// Row at this position of the working dataset activated
    RowActivated(usize),

    // Internal events
    /// Debounce quiet period elapsed for the given filter generation
    FilterElapsed(u64),
}

impl Message {
    /// Convert to string for debugging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mounted => "Mounted",
            Self::ProductsLoaded(_) => "ProductsLoaded",
            Self::LoadFailed(_) => "LoadFailed",
            Self::QueryChanged(_) => "QueryChanged",
            Self::SortRequested(_) => "SortRequested",
            Self::RowActivated(_) => "RowActivated",
            Self::FilterElapsed(_) => "FilterElapsed",
        }
    }
}

/// Work the host performs on behalf of the view.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    None,
    /// Issue the authenticated collection fetch
    FetchProducts,
    /// Cancel any pending filter pass and arm a new one. When `delay`
    /// elapses the host sends [`Message::FilterElapsed`] with `generation`.
    ScheduleFilter { generation: u64, delay: Duration },
    /// Open the detail view for this product
    Navigate(ProductId),
}
