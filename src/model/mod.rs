//! Data models for courses.
//!
//! - [`Course`]: A stored course with its store-assigned id
//! - [`CourseFields`]: The four business fields written on create and update

mod course;

pub use course::{Course, CourseFields};
