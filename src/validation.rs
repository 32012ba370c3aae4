//! Boundary validation of generation inputs.
//!
//! Checks collaborator-supplied records against a [`GenerationRequest`]
//! before a run starts. Detects:
//! - Courses with no (or blank) subjects
//! - Duplicate or unknown selected sections
//! - Sections belonging to another course or institution
//! - Allocations referencing unknown or foreign teachers
//! - Allocations for subjects the course does not teach
//!
//! Allocation *gaps* are not errors: a subject left without a teacher
//! simply yields unresolved slots at allocation time.

use std::collections::{HashMap, HashSet};

use crate::engine::GenerationRequest;
use crate::models::{Section, Teacher};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The course has no subjects.
    EmptyCourse,
    /// A subject name is blank.
    BlankSubject,
    /// A section was selected more than once.
    DuplicateSection,
    /// A selected section does not exist.
    UnknownSection,
    /// A selected section follows a different course.
    CourseMismatch,
    /// A record belongs to a different institution.
    InstitutionMismatch,
    /// An allocation references a teacher that does not exist.
    UnknownTeacher,
    /// An allocation names a subject the course does not teach.
    UnknownSubject,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a generation request against the institution's section and
/// teacher records.
///
/// All detected issues are collected; the first failure does not stop
/// the scan.
pub fn validate_request(
    request: &GenerationRequest,
    sections: &[Section],
    teachers: &[Teacher],
) -> ValidationResult {
    let mut errors = Vec::new();

    if request.course.subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCourse,
            format!("course '{}' has no subjects", request.course.id),
        ));
    }
    for subject in &request.course.subjects {
        if subject.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankSubject,
                format!("course '{}' contains a blank subject name", request.course.id),
            ));
        }
    }

    let section_map: HashMap<&str, &Section> =
        sections.iter().map(|s| (s.id.as_str(), s)).collect();
    let mut seen = HashSet::new();

    for section_id in &request.section_ids {
        if !seen.insert(section_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSection,
                format!("section '{section_id}' selected more than once"),
            ));
            continue;
        }
        match section_map.get(section_id.as_str()) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSection,
                format!("unknown section '{section_id}'"),
            )),
            Some(section) => {
                if section.course_id != request.course.id {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::CourseMismatch,
                        format!(
                            "section '{section_id}' follows course '{}', not '{}'",
                            section.course_id, request.course.id
                        ),
                    ));
                }
                if section.institution != request.institution {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InstitutionMismatch,
                        format!(
                            "section '{section_id}' belongs to institution '{}'",
                            section.institution
                        ),
                    ));
                }
            }
        }
    }

    let teacher_map: HashMap<&str, &Teacher> =
        teachers.iter().map(|t| (t.id.as_str(), t)).collect();

    for (subject, teacher_id) in &request.allocations {
        if !request.course.contains_subject(subject) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSubject,
                format!(
                    "allocation for '{subject}' which course '{}' does not teach",
                    request.course.id
                ),
            ));
        }
        match teacher_map.get(teacher_id.as_str()) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTeacher,
                format!("allocation for '{subject}' references unknown teacher '{teacher_id}'"),
            )),
            Some(teacher) => {
                if teacher.institution != request.institution {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InstitutionMismatch,
                        format!(
                            "teacher '{teacher_id}' belongs to institution '{}'",
                            teacher.institution
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
