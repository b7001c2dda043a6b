use crate::error::Result;
use crate::model::{Course, CourseFields};
use async_trait::async_trait;
use std::sync::Arc;

/// Shared handle to the course store, injected into the GraphQL schema.
pub type SharedStore = Arc<dyn CourseStore>;

/// Persistence operations backing the GraphQL resolvers.
///
/// Lookups that miss return `Ok(None)`; errors are reserved for invalid
/// input and store failures. Implementations must run
/// [`CourseFields::validate`] before writing.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>>;

    /// All courses in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Course>>;

    async fn insert(&self, fields: CourseFields) -> Result<Course>;

    /// Replaces all four fields and returns the updated course.
    async fn update_by_id(&self, id: &str, fields: CourseFields) -> Result<Option<Course>>;

    /// Removes the course and returns what was stored.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Course>>;

    /// Short backend name for log output.
    fn backend(&self) -> &'static str;
}
