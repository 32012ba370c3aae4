//! Section model.

use serde::{Deserialize, Serialize};

/// A student section (class group) following one course.
///
/// Section ids are system-generated and unique across institutions;
/// schedule replacement is keyed by section id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Display name (e.g., "Section A").
    pub name: String,
    /// The course this section follows.
    pub course_id: String,
    /// Denormalized course name for display.
    pub course_name: String,
    /// Owning institution key.
    pub institution: String,
}

impl Section {
    /// Creates a new section of a course.
    pub fn new(
        id: impl Into<String>,
        course_id: impl Into<String>,
        institution: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            course_id: course_id.into(),
            course_name: String::new(),
            institution: institution.into(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the denormalized course name.
    pub fn with_course_name(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = course_name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_builder() {
        let s = Section::new("sec-a", "c1", "inst")
            .with_name("Section A")
            .with_course_name("B.Tech CS Sem-1");
        assert_eq!(s.id, "sec-a");
        assert_eq!(s.course_id, "c1");
        assert_eq!(s.course_name, "B.Tech CS Sem-1");
    }
}
