use crate::error::Result;
use crate::validation;

/// The business fields of a course, without its identity.
///
/// Every write replaces all four fields; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFields {
    pub code: String,
    pub name: String,
    pub section: String,
    pub semester: String,
}

impl CourseFields {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        section: impl Into<String>,
        semester: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            section: section.into(),
            semester: semester.into(),
        }
    }

    /// Rejects the write if any required field is missing.
    pub fn validate(&self) -> Result<()> {
        validation::validate_required("code", &self.code)?;
        validation::validate_required("name", &self.name)?;
        validation::validate_required("section", &self.section)?;
        validation::validate_required("semester", &self.semester)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    pub section: String,
    pub semester: String,
}

impl Course {
    pub fn new(id: String, fields: CourseFields) -> Self {
        Self {
            id,
            code: fields.code,
            name: fields.name,
            section: fields.section,
            semester: fields.semester,
        }
    }

    /// Overwrites every business field, keeping the id.
    pub fn replace_fields(&mut self, fields: CourseFields) {
        self.code = fields.code;
        self.name = fields.name;
        self.section = fields.section;
        self.semester = fields.semester;
    }

    #[cfg(test)]
    pub fn fields(&self) -> CourseFields {
        CourseFields {
            code: self.code.clone(),
            name: self.name.clone(),
            section: self.section.clone(),
            semester: self.semester.clone(),
        }
    }
}
