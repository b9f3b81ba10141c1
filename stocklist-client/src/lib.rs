//! Product catalog client: authenticated fetch, debounced accent-insensitive
//! search and column sorting, rendered in the terminal or printed once.

pub mod app;
pub mod domains;
pub mod infra;
pub mod print;
pub mod tui;
