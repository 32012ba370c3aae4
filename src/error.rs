//! Error types for the timetable engine.
//!
//! Allocation shortfalls are deliberately not errors: an unfillable slot
//! is counted and reported on the run outcome, and the run still
//! commits. Errors here are the cases where a run never starts (bad
//! input) or aborts wholesale (store failure).

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by a [`ScheduleStore`](crate::store::ScheduleStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot read failed. No writes were attempted.
    #[error("schedule read failed: {0}")]
    Read(String),
    /// The atomic commit was rejected. No staged change was applied.
    #[error("schedule commit failed: {0}")]
    Commit(String),
}

/// Errors that prevent or abort a generation run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No sections were selected; the run was not started and the store
    /// was never touched.
    #[error("no sections selected")]
    NoSectionsSelected,
    /// Boundary validation rejected the inputs; the run was not started.
    #[error("invalid generation input: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
    /// The store failed while reading the snapshot or committing. A
    /// failed commit guarantees no partial schedule was written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationError, ValidationErrorKind};

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Commit("network down".into());
        assert_eq!(err.to_string(), "schedule commit failed: network down");
    }

    #[test]
    fn test_invalid_joins_messages() {
        let err = EngineError::Invalid(vec![
            ValidationError::new(ValidationErrorKind::EmptyCourse, "course has no subjects"),
            ValidationError::new(ValidationErrorKind::UnknownSection, "unknown section 'x'"),
        ]);
        let text = err.to_string();
        assert!(text.contains("course has no subjects"));
        assert!(text.contains("unknown section 'x'"));
    }

    #[test]
    fn test_store_error_converts() {
        let err: EngineError = StoreError::Read("timeout".into()).into();
        assert!(matches!(err, EngineError::Store(StoreError::Read(_))));
    }
}
