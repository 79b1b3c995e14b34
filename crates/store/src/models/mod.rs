//! Persisted record types.
//!
//! These are the JSON shapes written through the storage port. Field names
//! are wire format: changing them orphans existing profiles.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use order::{Order, OrderDraft, OrderItem};
pub use product::Product;
pub use user::{CurrentUser, LocalUser, UserMetadata};
