//! Outbound navigation to the product detail view.

use std::sync::Arc;

use parking_lot::Mutex;
use stocklist_model::ProductId;

/// Transitions the application to a product's detail view.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate_to_product(&self, id: &ProductId);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    ProductList,
    ProductDetail(ProductId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::ProductList => "/product_management".to_string(),
            Route::ProductDetail(id) => format!("/product/{id}"),
        }
    }
}

/// Records the active route; the terminal UI polls it after each message.
#[derive(Debug, Clone, Default)]
pub struct RouteNavigator {
    current: Arc<Mutex<Route>>,
}

impl RouteNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.current.lock().clone()
    }

    pub fn back_to_list(&self) {
        *self.current.lock() = Route::ProductList;
    }
}

impl Navigator for RouteNavigator {
    fn navigate_to_product(&self, id: &ProductId) {
        let route = Route::ProductDetail(id.clone());
        log::info!("Navigating to {}", route.path());
        *self.current.lock() = route;
    }
}
