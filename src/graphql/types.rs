use crate::model::Course as ModelCourse;
use async_graphql::SimpleObject;

/// This represents a course
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    /// Identifier assigned by the store
    pub id: String,
    pub code: String,
    pub name: String,
    pub section: String,
    pub semester: String,
}

impl From<ModelCourse> for Course {
    fn from(c: ModelCourse) -> Self {
        Self {
            id: c.id,
            code: c.code,
            name: c.name,
            section: c.section,
            semester: c.semester,
        }
    }
}
