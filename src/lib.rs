pub mod config;
pub mod crud;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

// Re-export main items
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use models::{CreateItem, Detail, Item, ItemPatch};
pub use routes::AppState;
