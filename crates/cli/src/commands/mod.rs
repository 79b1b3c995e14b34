//! CLI command implementations.
//!
//! Commands talk to the data layer through a [`StoreState`] built over a
//! [`FileStore`] profile; the profile location comes from the environment
//! (see [`StoreConfig`]). Output goes through `tracing`.

pub mod auth;
pub mod cart;
pub mod favorites;
pub mod history;
pub mod orders;
pub mod products;

use shoplite_store::{FileStore, StoreConfig, StoreError, StoreState};

/// Load configuration and open the profile-backed store.
///
/// # Errors
///
/// Returns `StoreError::Config` for invalid environment variables and
/// `StoreError::Storage` if the profile directory cannot be created.
pub fn init_state() -> Result<StoreState<FileStore>, StoreError> {
    let config = StoreConfig::from_env()?;
    let store = FileStore::open(&config.data_dir)?;
    Ok(StoreState::new(store, &config))
}
