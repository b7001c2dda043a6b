//! Input validation for course data.

use crate::error::{CoursesError, Result};

/// Validates that a required course field carries a value.
///
/// An empty string counts as absent, the same way a required string is
/// treated by the document store schema the data originates from.
pub fn validate_required(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CoursesError::Validation { field });
    }
    Ok(())
}
