//! GraphQL schema and resolvers for courses.
//!
//! Every field resolves through exactly one [`CourseStore`](crate::storage::CourseStore)
//! call. The store handle is supplied to [`build_schema`] and read back from
//! the schema data by each resolver.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! courses serve --port 4000
//!
//! # Queries also run over GET; mutations need POST
//! curl 'http://localhost:4000/graphql?query=%7Bcourses%7Bid%7D%7D'
//!
//! # Execute a query from CLI
//! courses query '{ courses { id code name } }'
//!
//! # Execute a mutation from CLI
//! courses mutate 'addCourse(code: "CS101", name: "Intro to CS", section: "A", semester: "Fall2024") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `course`, `courses`
//! - **Mutations**: `addCourse`, `updateCourse`, `deleteCourse`
//!
//! Lookups that miss resolve to `null`, except `deleteCourse`, which reports
//! a `NOT_FOUND` error. Errors carry their kind in `extensions.code`.

mod schema;
mod server;
mod types;

pub use schema::{CourseSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
