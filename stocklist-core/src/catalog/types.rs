//! Catalog view state

use std::sync::Arc;
use std::time::Duration;

use stocklist_model::Product;

use crate::matcher::DEFAULT_MIN_QUERY_CHARS;
use crate::presentation::{DESCRIPTION_PREVIEW_CHARS, TableModel};
use crate::sorting::SortToggles;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Tunables for one catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    /// Quiet period before a query or dataset change is filtered
    pub debounce: Duration,
    /// Raw query length below which the full list is shown
    pub min_query_chars: usize,
    /// Description preview length in the table
    pub description_preview_chars: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            description_preview_chars: DESCRIPTION_PREVIEW_CHARS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded { count: usize },
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// State of one mounted catalog view.
#[derive(Debug, Clone)]
pub struct CatalogState {
    /// Collection as fetched; every filter pass starts here
    pub(crate) original: Arc<[Product]>,
    /// Rows currently displayed
    pub(crate) working: Vec<Product>,
    pub(crate) query: String,
    pub(crate) toggles: SortToggles,
    pub(crate) load: LoadState,
    pub(crate) settings: ViewSettings,
    /// Generation of the most recently scheduled filter pass
    pub(crate) filter_generation: u64,
    /// Filter passes actually applied
    pub(crate) filter_passes: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(ViewSettings::default())
    }
}

impl CatalogState {
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            original: Arc::from(Vec::new()),
            working: Vec::new(),
            query: String::new(),
            toggles: SortToggles::default(),
            load: LoadState::Idle,
            settings,
            filter_generation: 0,
            filter_passes: 0,
        }
    }

    pub fn original(&self) -> &Arc<[Product]> {
        &self.original
    }

    pub fn working(&self) -> &[Product] {
        &self.working
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn toggles(&self) -> &SortToggles {
        &self.toggles
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn filter_generation(&self) -> u64 {
        self.filter_generation
    }

    pub fn filter_passes(&self) -> u64 {
        self.filter_passes
    }

    /// Render-ready projection of the working dataset.
    pub fn table(&self) -> TableModel {
        TableModel::build(
            &self.working,
            &self.toggles,
            self.settings.description_preview_chars,
        )
    }
}
