//! Storefront managers.
//!
//! Each manager borrows the storage port (and, where it mutates shared
//! views, the event channel) from [`crate::state::StoreState`] and owns one
//! slice of the data model.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod orders;
pub mod search_history;

pub use auth::AuthService;
pub use cart::CartManager;
pub use catalog::{CatalogError, CatalogService};
pub use favorites::FavoritesManager;
pub use orders::{OrderError, OrderManager};
pub use search_history::SearchHistoryManager;
