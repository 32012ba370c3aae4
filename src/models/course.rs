//! Course model.
//!
//! A course is an ordered list of subject names owned by a single
//! institution. Sections reference a course; the generator cycles the
//! subject list across the daily slot grid.

use serde::{Deserialize, Serialize};

/// A course: the ordered sequence of subjects taught to its sections.
///
/// Subject order matters (it drives slot cycling) and duplicates are
/// allowed — a subject listed twice receives twice the slots. A course
/// is immutable while referenced by a generation run; create/edit/delete
/// belongs to the surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name (e.g., "B.Tech CS Sem-1").
    pub name: String,
    /// Ordered subject names. Non-empty strings; duplicates allowed.
    pub subjects: Vec<String>,
    /// Owning institution key.
    pub institution: String,
}

impl Course {
    /// Creates a new course for an institution.
    pub fn new(id: impl Into<String>, institution: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subjects: Vec::new(),
            institution: institution.into(),
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends one subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Appends subjects in order.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects.extend(subjects.into_iter().map(Into::into));
        self
    }

    /// Whether the course teaches a given subject.
    pub fn contains_subject(&self, name: &str) -> bool {
        self.subjects.iter().any(|s| s == name)
    }
}
