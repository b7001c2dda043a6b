use super::store::CourseStore;
use crate::config::DatabaseSettings;
use crate::error::{CoursesError, Result};
use crate::model::{Course, CourseFields};
use async_trait::async_trait;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

/// Database used when the connection string names none.
const DEFAULT_DATABASE: &str = "course";

/// A course as stored in MongoDB, keyed by `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CourseDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    code: String,
    name: String,
    section: String,
    semester: String,
}

impl CourseDocument {
    fn new(id: ObjectId, fields: CourseFields) -> Self {
        Self {
            id,
            code: fields.code,
            name: fields.name,
            section: fields.section,
            semester: fields.semester,
        }
    }
}

impl From<CourseDocument> for Course {
    fn from(d: CourseDocument) -> Self {
        Self {
            id: d.id.to_hex(),
            code: d.code,
            name: d.name,
            section: d.section,
            semester: d.semester,
        }
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| CoursesError::store("parse course id", e))
}

fn by_id(oid: ObjectId) -> Document {
    doc! { "_id": oid }
}

pub struct MongoStore {
    collection: Collection<CourseDocument>,
}

impl MongoStore {
    /// Connects to the configured database and verifies the server answers.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        let client = Client::with_uri_str(&settings.url)
            .await
            .map_err(|e| CoursesError::store("connect to database", e))?;

        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| CoursesError::store("connect to database", e))?;

        tracing::info!(
            database = %database.name(),
            collection = %settings.collection,
            "Connected to database"
        );

        Ok(Self {
            collection: database.collection(&settings.collection),
        })
    }
}

#[async_trait]
impl CourseStore for MongoStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>> {
        let oid = parse_object_id(id)?;
        let found = self
            .collection
            .find_one(by_id(oid))
            .await
            .map_err(|e| CoursesError::store("find course", e))?;
        Ok(found.map(Course::from))
    }

    async fn find_all(&self) -> Result<Vec<Course>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| CoursesError::store("list courses", e))?;

        let mut courses = Vec::new();
        while cursor
            .advance()
            .await
            .map_err(|e| CoursesError::store("list courses", e))?
        {
            let document = cursor
                .deserialize_current()
                .map_err(|e| CoursesError::store("list courses", e))?;
            courses.push(document.into());
        }
        Ok(courses)
    }

    async fn insert(&self, fields: CourseFields) -> Result<Course> {
        fields.validate()?;

        let document = CourseDocument::new(ObjectId::new(), fields);
        tracing::info!(id = %document.id, code = %document.code, "Creating course");

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| CoursesError::store("insert course", e))?;
        Ok(document.into())
    }

    async fn update_by_id(&self, id: &str, fields: CourseFields) -> Result<Option<Course>> {
        fields.validate()?;
        let oid = parse_object_id(id)?;

        tracing::info!(id = %id, "Updating course");
        let CourseFields {
            code,
            name,
            section,
            semester,
        } = fields;
        let update = doc! {
            "$set": {
                "code": code,
                "name": name,
                "section": section,
                "semester": semester,
            }
        };

        let updated = self
            .collection
            .find_one_and_update(by_id(oid), update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| CoursesError::store("update course", e))?;
        Ok(updated.map(Course::from))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Course>> {
        let oid = parse_object_id(id)?;

        tracing::info!(id = %id, "Deleting course");
        let deleted = self
            .collection
            .find_one_and_delete(by_id(oid))
            .await
            .map_err(|e| CoursesError::store("delete course", e))?;
        Ok(deleted.map(Course::from))
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
