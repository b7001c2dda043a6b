use super::store::CourseStore;
use crate::error::Result;
use crate::model::{Course, CourseFields};
use async_trait::async_trait;
use tokio::sync::RwLock;

const ID_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Same length as a hex ObjectId so ids look alike across backends.
const ID_LENGTH: usize = 24;

/// Course store kept in process memory, in insertion order.
///
/// Used by the test suite and by `--in-memory` development runs. Nothing is
/// persisted across restarts.
#[derive(Default)]
pub struct InMemoryStore {
    courses: RwLock<Vec<Course>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id() -> String {
        nanoid::format(nanoid::rngs::default, &ID_ALPHABET, ID_LENGTH)
    }
}

#[async_trait]
impl CourseStore for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Course>> {
        Ok(self.courses.read().await.clone())
    }

    async fn insert(&self, fields: CourseFields) -> Result<Course> {
        fields.validate()?;

        let course = Course::new(Self::generate_id(), fields);
        tracing::info!(id = %course.id, code = %course.code, "Creating course");

        self.courses.write().await.push(course.clone());
        Ok(course)
    }

    async fn update_by_id(&self, id: &str, fields: CourseFields) -> Result<Option<Course>> {
        fields.validate()?;

        let mut courses = self.courses.write().await;
        let Some(course) = courses.iter_mut().find(|c| c.id == id) else {
            tracing::debug!(id = %id, "Course to update not found");
            return Ok(None);
        };

        tracing::info!(id = %id, "Updating course");
        course.replace_fields(fields);
        Ok(Some(course.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Course>> {
        let mut courses = self.courses.write().await;
        let Some(pos) = courses.iter().position(|c| c.id == id) else {
            tracing::debug!(id = %id, "Course to delete not found");
            return Ok(None);
        };

        tracing::info!(id = %id, "Deleting course");
        Ok(Some(courses.remove(pos)))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoursesError;

    fn fields(section: &str) -> CourseFields {
        CourseFields::new("CS101", "Intro to CS", section, "Fall2024")
    }

    #[tokio::test]
    async fn test_insert_assigns_hex_id() {
        let store = InMemoryStore::new();
        let course = store.insert(fields("A")).await.unwrap();

        assert_eq!(course.id.len(), ID_LENGTH);
        assert!(course.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(course.fields(), fields("A"));
    }

    #[tokio::test]
    async fn test_insert_rejects_missing_field() {
        let store = InMemoryStore::new();
        let mut invalid = fields("A");
        invalid.code.clear();

        let err = store.insert(invalid).await.unwrap_err();
        assert!(matches!(err, CoursesError::Validation { field: "code" }));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = InMemoryStore::new();
        let a = store.insert(fields("A")).await.unwrap();
        let b = store.insert(fields("B")).await.unwrap();
        let c = store.insert(fields("C")).await.unwrap();

        let ids: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let store = InMemoryStore::new();
        let course = store.insert(fields("A")).await.unwrap();

        let updated = store
            .update_by_id(&course.id, fields("B"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, course.id);
        assert_eq!(updated.section, "B");

        let stored = store.find_by_id(&course.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = InMemoryStore::new();
        assert!(
            store
                .update_by_id("missing", fields("A"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let store = InMemoryStore::new();
        let course = store.insert(fields("A")).await.unwrap();

        let err = store
            .update_by_id(&course.id, fields(""))
            .await
            .unwrap_err();
        assert!(matches!(err, CoursesError::Validation { field: "section" }));

        let stored = store.find_by_id(&course.id).await.unwrap().unwrap();
        assert_eq!(stored.section, "A");
    }

    #[tokio::test]
    async fn test_delete_returns_removed_course() {
        let store = InMemoryStore::new();
        let course = store.insert(fields("A")).await.unwrap();

        let deleted = store.delete_by_id(&course.id).await.unwrap();
        assert_eq!(deleted, Some(course.clone()));
        assert!(store.find_by_id(&course.id).await.unwrap().is_none());
        assert!(store.delete_by_id(&course.id).await.unwrap().is_none());
    }
}
