//! Content store and query evaluation for the Cinevault catalog.
//!
//! The catalog is a single collection of [`ContentRecord`]s behind the
//! [`ContentStore`] trait. Two backends are provided: Postgres for
//! production and an in-memory store for tests and local development.

pub mod error;
pub mod slug;
pub mod store;

pub use error::{CatalogError, Result};
pub use store::memory::InMemoryContentStore;
pub use store::postgres::PostgresContentStore;
pub use store::ContentStore;

pub use cinevault_model as model;
pub use cinevault_model::{ContentDraft, ContentFilter, ContentRecord};
