//! Teacher model.

use serde::{Deserialize, Serialize};

/// A teacher who can be allocated to subjects.
///
/// A teacher belongs to exactly one institution; conflict detection
/// never looks across institution boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Display name (e.g., "Dr. Sharma").
    pub name: String,
    /// Owning institution key.
    pub institution: String,
}

impl Teacher {
    /// Creates a new teacher for an institution.
    pub fn new(id: impl Into<String>, institution: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            institution: institution.into(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("t1", "inst").with_name("Dr. Sharma");
        assert_eq!(t.id, "t1");
        assert_eq!(t.name, "Dr. Sharma");
        assert_eq!(t.institution, "inst");
    }
}
