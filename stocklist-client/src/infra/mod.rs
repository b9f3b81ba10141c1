pub mod api_client;
pub mod logging;
pub mod navigation;
pub mod services;
pub mod session;

pub use api_client::ApiClient;
pub use navigation::{Navigator, Route, RouteNavigator};
pub use services::products::{FetchError, ProductSource};
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};
