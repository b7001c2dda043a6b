//! # Courses - a GraphQL API over a course collection
//!
//! Exposes create, read, update and delete operations on `Course` records
//! through a single GraphQL endpoint. Resolvers are a thin layer over a
//! document store: MongoDB in production, an in-memory store for tests and
//! local runs.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve against a local MongoDB (mongodb://127.0.0.1:27017/course)
//! courses serve
//!
//! # Serve without a database
//! courses serve --in-memory
//!
//! # Print the schema
//! courses schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: The `Course` data model
//! - [`storage`]: Course stores
//! - [`validation`]: Required-field validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `courses.yml` configuration files and their defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `CoursesError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server exposing it.
pub mod graphql;

/// Data models for courses.
pub mod model;

/// Course storage backends.
pub mod storage;

pub mod logging;
pub mod validation;
