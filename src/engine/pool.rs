//! Lecture pool construction.
//!
//! Expands a course's subject list over the slot grid (cycling when the
//! grid is longer than the list) and attaches the teacher allocated to
//! each subject. Subjects without an allocation are dropped outright
//! rather than kept as placeholders; the missing lectures surface later
//! as unresolved slots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Course;

/// Ephemeral subject → teacher-id mapping supplied per generation run.
///
/// Never persisted; the engine keeps no memory of past allocations
/// beyond what is embedded in committed [`ScheduleEntry`] records.
///
/// [`ScheduleEntry`]: crate::models::ScheduleEntry
pub type AllocationMap = HashMap<String, String>;

/// One schedulable lecture: a subject paired with its allocated teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    /// Subject taught.
    pub subject: String,
    /// Teacher allocated to the subject for this run.
    pub teacher_id: String,
}

/// Builds the lecture pool for one section of `course`.
///
/// Entry *i* pairs `subjects[i % subjects.len()]` with its allocated
/// teacher; at most `slots` lectures are produced. An empty subject list
/// or a fully unallocated map yields an empty pool, which is not an
/// error — the section simply receives zero placements.
pub fn build_pool(course: &Course, allocations: &AllocationMap, slots: usize) -> Vec<Lecture> {
    if course.subjects.is_empty() {
        return Vec::new();
    }

    (0..slots)
        .filter_map(|i| {
            let subject = &course.subjects[i % course.subjects.len()];
            allocations.get(subject).map(|teacher_id| Lecture {
                subject: subject.clone(),
                teacher_id: teacher_id.clone(),
            })
        })
        .collect()
}
