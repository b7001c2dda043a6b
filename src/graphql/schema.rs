use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::error::CoursesError;
use crate::model::CourseFields;
use crate::storage::SharedStore;

use super::types::*;

pub type CourseSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> CourseSchema {
    tracing::debug!(backend = store.backend(), "Building GraphQL schema");

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single course
    async fn course(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
    ) -> async_graphql::Result<Option<Course>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = get_store(ctx)?;
        let course = store.find_by_id(&id).await.map_err(CoursesError::into_graphql)?;
        Ok(course.map(Course::from))
    }

    /// List of all courses
    async fn courses(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Course>> {
        let store = get_store(ctx)?;
        let courses = store.find_all().await.map_err(CoursesError::into_graphql)?;
        Ok(courses.into_iter().map(Course::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a course
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        code: String,
        name: String,
        section: String,
        semester: String,
    ) -> async_graphql::Result<Course> {
        let store = get_store(ctx)?;
        let fields = CourseFields::new(code, name, section, semester);
        let course = store.insert(fields).await.map_err(CoursesError::into_graphql)?;
        Ok(course.into())
    }

    /// Update a course, replacing all of its fields
    async fn update_course(
        &self,
        ctx: &Context<'_>,
        id: String,
        code: String,
        name: String,
        section: String,
        semester: String,
    ) -> async_graphql::Result<Option<Course>> {
        let store = get_store(ctx)?;
        let fields = CourseFields::new(code, name, section, semester);
        let course = store
            .update_by_id(&id, fields)
            .await
            .map_err(CoursesError::into_graphql)?;
        Ok(course.map(Course::from))
    }

    /// Delete a course
    async fn delete_course(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Course> {
        let store = get_store(ctx)?;
        match store.delete_by_id(&id).await {
            Ok(Some(course)) => Ok(course.into()),
            Ok(None) => Err(CoursesError::NotFound(id).into_graphql()),
            Err(e) => Err(e.into_graphql()),
        }
    }
}
