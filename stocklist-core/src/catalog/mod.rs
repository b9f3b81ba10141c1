//! Catalog listing view model.
//!
//! Holds the original and working datasets, the raw query and the three sort
//! toggles. [`update`] applies one [`Message`] and returns the [`Effect`] the
//! host must carry out (fetch, arm the debounce timer, navigate).

pub mod messages;
pub mod types;
pub mod update;

pub use self::messages::{Effect, Message};
pub use self::types::{CatalogState, LoadState, ViewSettings};
pub use self::update::update;
