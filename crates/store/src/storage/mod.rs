//! The storage port and its backends.
//!
//! Everything the storefront persists goes through [`StorageBackend`]: a
//! string-keyed, string-valued store holding JSON-encoded payloads under the
//! fixed key names in [`keys`]. Managers never touch a concrete storage
//! mechanism; they receive a backend by reference, which is what lets tests
//! run against [`MemoryStore`] while the CLI uses a [`FileStore`] profile
//! directory.
//!
//! # Parse failures fail open
//!
//! A value that does not parse as the expected shape is treated as the empty
//! default and logged at `warn`; it is never surfaced to the caller. This
//! matches the recovery story of the storage model: corrupt state degrades to
//! "nothing stored", not to an error page.
//!
//! # No cross-process coordination
//!
//! The port has no locking discipline and no versioning. Within one process,
//! operations on a key are totally ordered; across processes, the last writer
//! to a key wins and a stale reader can silently overwrite a concurrent
//! change. This race is an accepted property of the design.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage key names.
///
/// All persisted state lives under these keys. `searchHistory` keeps its
/// historical camelCase spelling; renaming it would orphan existing profiles.
pub mod keys {
    /// Key for the current session snapshot.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the persisted user list.
    pub const LOCAL_USERS: &str = "local_users";

    /// Key for the cart item list.
    pub const CART: &str = "cart";

    /// Key for the flat order list, spanning all users.
    pub const USER_ORDERS: &str = "user_orders";

    /// Key for the favorite product-id list.
    pub const FAVORITES: &str = "favorites";

    /// Key for the search history list, most recent first.
    pub const SEARCH_HISTORY: &str = "searchHistory";
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (file backend).
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The injected storage port: get/set/remove of string values by key.
///
/// Implementations must be cheap to call concurrently from one process; they
/// are not required to coordinate across processes.
#[allow(async_fn_in_trait)]
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode the JSON value under `key`, falling back to `T::default()`
/// when the key is absent or the stored value does not parse.
///
/// # Errors
///
/// Returns [`StorageError::Io`] only when the backend itself fails; decode
/// failures are logged and recovered.
pub async fn read_json_or_default<S, T>(store: &S, key: &str) -> Result<T, StorageError>
where
    S: StorageBackend,
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::warn!(key, %err, "stored value failed to parse, treating as empty");
            Ok(T::default())
        }
    }
}

/// Read and decode the JSON value under `key`, if present and well-formed.
///
/// Unlike [`read_json_or_default`], the caller can distinguish "absent" from
/// "present"; a malformed value still reads as absent (logged).
///
/// # Errors
///
/// Returns [`StorageError::Io`] only when the backend itself fails.
pub async fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    S: StorageBackend,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(key, %err, "stored value failed to parse, treating as absent");
            Ok(None)
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Serialization`] if encoding fails and
/// [`StorageError::Io`] if the backend cannot be written.
pub async fn write_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: StorageBackend,
    T: Serialize,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_json_or_default_on_absent_key() {
        let store = MemoryStore::new();
        let list: Vec<String> = read_json_or_default(&store, keys::CART).await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_read_json_or_default_recovers_from_garbage() {
        let store = MemoryStore::new();
        store.set(keys::CART, "{not json").await.unwrap();
        let list: Vec<String> = read_json_or_default(&store, keys::CART).await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read_roundtrips() {
        let store = MemoryStore::new();
        let written = vec!["a".to_owned(), "b".to_owned()];
        write_json(&store, keys::SEARCH_HISTORY, &written)
            .await
            .unwrap();
        let read: Vec<String> = read_json_or_default(&store, keys::SEARCH_HISTORY)
            .await
            .unwrap();
        assert_eq!(read, written);
    }

    #[tokio::test]
    async fn test_read_json_distinguishes_absent() {
        let store = MemoryStore::new();
        let missing: Option<Vec<String>> = read_json(&store, keys::FAVORITES).await.unwrap();
        assert!(missing.is_none());

        write_json(&store, keys::FAVORITES, &vec![1, 2, 3])
            .await
            .unwrap();
        let present: Option<Vec<i32>> = read_json(&store, keys::FAVORITES).await.unwrap();
        assert_eq!(present, Some(vec![1, 2, 3]));
    }
}
