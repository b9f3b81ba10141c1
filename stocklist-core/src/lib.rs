//! Client-side catalog pipeline: fetch result → normalize → debounced filter
//! → column sort → render-ready table.
//!
//! Everything in this crate is synchronous and free of I/O. The
//! [`catalog`] module is an Elm-style view model: feed it a
//! [`catalog::Message`], apply the returned [`catalog::Effect`]. Timers,
//! HTTP and navigation live with the caller.

#![allow(missing_docs)]

pub mod catalog;
pub mod matcher;
pub mod normalize;
pub mod presentation;
pub mod sorting;

pub use catalog::{CatalogState, Effect, LoadState, Message, ViewSettings};
pub use matcher::{filter_products, matches_query, query_is_active};
pub use normalize::normalize;
pub use presentation::{HeaderCell, TableModel, TableRow, truncate_description};
pub use sorting::{SortColumn, SortDirection, SortToggles, sort_products};

pub use stocklist_model::{Prices, Product, ProductId, ProductInfo};
