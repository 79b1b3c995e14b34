//! Shoplite Store - Local-first storefront data layer.
//!
//! Product browsing, cart management, mock phone+password authentication, and
//! per-user order history, all persisted through an injected key-value
//! storage port with JSON-encoded values. There is no server here: every
//! "backend" call is a synchronous local operation wrapped in an async result
//! envelope, so callers are shaped the same whether the port is backed by a
//! profile directory on disk, memory, or (one day) a networked store.
//!
//! # Architecture
//!
//! - [`storage`] - The storage port ([`storage::StorageBackend`]), the fixed
//!   key table, and the file/memory backends
//! - [`services`] - Session, catalog, order, cart, favorites, and search
//!   history managers
//! - [`events`] - Process-local change signals for listening views
//! - [`state`] - [`state::StoreState`], which owns the backend and hands out
//!   managers
//! - [`config`] / [`remote`] - Environment configuration and the conditional
//!   remote-backend placeholder client
//!
//! # Consistency model
//!
//! Storage operations on the same key are totally ordered within one process;
//! every list mutation re-serializes the whole list, so concurrent writers
//! from separate processes race and the last writer wins. There is no
//! locking, no versioning, and no transaction spanning two keys - checkout,
//! for example, is an order append followed by an independent cart clear, and
//! a crash between the two leaves the window visible. These are accepted
//! properties of the storage model, not bugs to paper over.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod remote;
pub mod services;
pub mod state;
pub mod storage;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use events::{StoreEvent, StoreEvents};
pub use state::StoreState;
pub use storage::{FileStore, MemoryStore, StorageBackend, StorageError};
