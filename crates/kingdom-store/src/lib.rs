//! Document store contract for Kingdom.
//!
//! The household lives in an external, eventually consistent document
//! store. This crate describes what Kingdom needs from it:
//! - live subscriptions that deliver complete record sets (never deltas)
//! - single-document subscriptions
//! - `create`, `update`, `delete` and `upsert` writes, where a field may ask
//!   for a server-assigned timestamp
//!
//! [`InMemoryStore`] implements the contract for tests and local use.
//!
//! # Example
//!
//! ```
//! use kingdom_store::{Collection, DocumentStore, Fields, InMemoryStore, OrderBy};
//! use serde_json::json;
//!
//! let store = InMemoryStore::new();
//! let mut chores = store.subscribe(Collection::Chores, Some(OrderBy::asc("createdAt")));
//!
//! store
//!     .create(
//!         Collection::Chores,
//!         Fields::new().set("title", json!("Dishes")).server_timestamp("createdAt"),
//!     )
//!     .unwrap();
//!
//! let latest = chores.try_latest().unwrap();
//! assert_eq!(latest.len(), 1);
//! assert_eq!(latest[0].get("title"), Some(&json!("Dishes")));
//! ```

mod collection;
mod document;
mod error;
mod memory;
mod subscription;
mod write;

pub use collection::{Collection, Direction, OrderBy};
pub use document::Document;
pub use error::StoreError;
pub use memory::InMemoryStore;
pub use subscription::Subscription;
pub use write::{FieldValue, Fields};

/// What Kingdom requires of its backing store.
///
/// Writes are independent: each may fail on its own and none is atomic
/// with another. A store must give read-your-writes to the session that
/// wrote; convergence across sessions may lag.
pub trait DocumentStore: Send + Sync {
    /// Streams the full record set of `collection` until the subscription
    /// is dropped. The current set is delivered immediately.
    fn subscribe(&self, collection: Collection, order: Option<OrderBy>) -> Subscription<Vec<Document>>;

    /// Streams one document; `None` while it does not exist.
    fn subscribe_doc(&self, collection: Collection, id: &str) -> Subscription<Option<Document>>;

    /// Adds a document under a store-assigned id and returns the id.
    fn create(&self, collection: Collection, fields: Fields) -> Result<String, StoreError>;

    /// Merges `fields` into an existing document. Paths may be dotted
    /// (`votes.Ducky`) to reach into nested maps.
    fn update(&self, collection: Collection, id: &str, fields: Fields) -> Result<(), StoreError>;

    fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError>;

    /// Replaces the document at `id`, creating it if missing.
    fn upsert(&self, collection: Collection, id: &str, fields: Fields) -> Result<(), StoreError>;
}
