//! Course storage.
//!
//! Resolvers talk to storage only through the [`CourseStore`] trait, held as
//! a [`SharedStore`] in the GraphQL schema data.
//!
//! ## Components
//!
//! - [`MongoStore`]: Courses in a MongoDB collection
//! - [`InMemoryStore`]: Courses in process memory, for tests and local runs
//! - [`open_store`]: Picks a backend from the store settings

mod memory_store;
mod mongo_store;
mod store;

pub use memory_store::InMemoryStore;
pub use mongo_store::MongoStore;
pub use store::{CourseStore, SharedStore};

use crate::config::DatabaseSettings;
use crate::error::Result;
use std::sync::Arc;

/// Opens the store described by `settings`, or an empty in-memory store.
pub async fn open_store(settings: &DatabaseSettings, in_memory: bool) -> Result<SharedStore> {
    if in_memory {
        tracing::warn!("Using in-memory store, data will not be persisted");
        return Ok(Arc::new(InMemoryStore::new()));
    }
    Ok(Arc::new(MongoStore::connect(settings).await?))
}
