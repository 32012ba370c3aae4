//! Generation run driver: greedy first-fit slot allocation.
//!
//! # Algorithm
//!
//! 1. Read every stored entry for the institution once, as a snapshot,
//!    and seed the conflict index from it.
//! 2. For each selected section, in caller order: stage deletion of the
//!    section's old entries, build and arrange a fresh lecture pool,
//!    then fill slots first-fit — the first pooled lecture whose teacher
//!    is free takes the slot, and the index records it so every later
//!    slot and section sees the placement.
//! 3. Submit all deletions and insertions as one atomic batch.
//!
//! Unfillable slots (every pooled teacher busy, or pool exhausted) are
//! counted, not fatal: the run still commits what it placed and reports
//! [`RunStatus::SucceededWithConflicts`].
//!
//! # Complexity
//! O(sections * slots * pool) placements over an O(1) busy lookup.

use std::collections::HashSet;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Course, ScheduleEntry, Section, Teacher, SLOTS_PER_DAY};
use crate::store::{ReplaceBatch, ScheduleStore};
use crate::validation::{validate_request, ValidationError, ValidationErrorKind};

use super::conflict::ConflictIndex;
use super::ordering::{PoolOrdering, Shuffled};
use super::pool::{build_pool, AllocationMap};

/// Input container for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Institution key scoping every read and write.
    pub institution: String,
    /// Course shared by every selected section.
    pub course: Course,
    /// Sections to regenerate, processed in this order.
    pub section_ids: Vec<String>,
    /// Subject → teacher allocation for this run.
    pub allocations: AllocationMap,
}

impl GenerationRequest {
    /// Creates a request with no sections or allocations yet.
    pub fn new(institution: impl Into<String>, course: Course) -> Self {
        Self {
            institution: institution.into(),
            course,
            section_ids: Vec::new(),
            allocations: AllocationMap::new(),
        }
    }

    /// Adds a section to regenerate.
    pub fn with_section(mut self, section_id: impl Into<String>) -> Self {
        self.section_ids.push(section_id.into());
        self
    }

    /// Adds sections in order.
    pub fn with_sections<I, S>(mut self, section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_ids
            .extend(section_ids.into_iter().map(Into::into));
        self
    }

    /// Allocates a teacher to a subject for this run.
    pub fn with_allocation(
        mut self,
        subject: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        self.allocations.insert(subject.into(), teacher_id.into());
        self
    }

    /// Checks this request against the institution's section and
    /// teacher records at the boundary where collaborator data enters
    /// the engine.
    pub fn validate(&self, sections: &[Section], teachers: &[Teacher]) -> Result<(), EngineError> {
        validate_request(self, sections, teachers).map_err(EngineError::Invalid)
    }
}

/// Terminal status of a committed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// Every slot of every section was filled.
    Succeeded,
    /// Committed, but some slots could not be filled.
    SucceededWithConflicts,
}

/// Outcome of a committed generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Terminal status.
    pub status: RunStatus,
    /// Entries placed and committed across all sections.
    pub placed: usize,
    /// `(section, slot)` pairs left unassigned.
    pub unresolved: usize,
}

/// Timetable generator: randomized greedy first-fit over the slot grid.
///
/// # Example
///
/// ```
/// use u_timetable::engine::{GenerationRequest, Generator, Sequential};
/// use u_timetable::models::Course;
/// use u_timetable::store::MemoryStore;
///
/// let course = Course::new("c1", "inst")
///     .with_name("B.Tech CS Sem-1")
///     .with_subjects(["Math", "Physics"]);
/// let request = GenerationRequest::new("inst", course)
///     .with_section("sec-a")
///     .with_allocation("Math", "t1")
///     .with_allocation("Physics", "t2");
///
/// let mut store = MemoryStore::new();
/// let generator = Generator::new().with_slots(4).with_ordering(Sequential);
/// let report = generator.generate(&mut store, &request).unwrap();
/// assert_eq!(report.placed, 4);
/// assert_eq!(report.unresolved, 0);
/// ```
#[derive(Debug)]
pub struct Generator {
    slots: usize,
    ordering: Box<dyn PoolOrdering>,
}

impl Generator {
    /// Creates a generator with the default grid and shuffled ordering.
    pub fn new() -> Self {
        Self {
            slots: SLOTS_PER_DAY,
            ordering: Box::new(Shuffled),
        }
    }

    /// Sets the number of slots per day.
    pub fn with_slots(mut self, slots: usize) -> Self {
        self.slots = slots;
        self
    }

    /// Sets the pool ordering strategy.
    pub fn with_ordering<O: PoolOrdering + 'static>(mut self, ordering: O) -> Self {
        self.ordering = Box::new(ordering);
        self
    }

    /// Runs one generation: a full, atomic replace of the selected
    /// sections' entries.
    ///
    /// The institution snapshot is read once, up front, and never
    /// re-validated at commit time. Two overlapping runs against the
    /// same institution can therefore each see a teacher as free and
    /// double-book them; callers must serialize runs per institution.
    ///
    /// Record-level checks ([`GenerationRequest::validate`]) are the
    /// caller's responsibility and must run before this; `generate`
    /// sees only the request. Duplicate ids in `section_ids` are the
    /// exception: a section allocated twice would commit two entries
    /// per slot, so they are rejected here regardless.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoSectionsSelected`] if `section_ids` is empty
    /// and [`EngineError::Invalid`] if it repeats a section, both
    /// before any store access; [`EngineError::Store`] if the snapshot
    /// read or the atomic commit fails. A failed commit leaves the
    /// store untouched.
    pub fn generate(
        &self,
        store: &mut dyn ScheduleStore,
        request: &GenerationRequest,
    ) -> Result<RunReport, EngineError> {
        if request.section_ids.is_empty() {
            return Err(EngineError::NoSectionsSelected);
        }

        // Staged deletes only clear stored entries, so a section listed
        // twice would keep both passes' inserts in the batch.
        let mut seen = HashSet::new();
        let duplicates: Vec<ValidationError> = request
            .section_ids
            .iter()
            .filter(|id| !seen.insert(id.as_str()))
            .map(|id| {
                ValidationError::new(
                    ValidationErrorKind::DuplicateSection,
                    format!("section '{id}' selected more than once"),
                )
            })
            .collect();
        if !duplicates.is_empty() {
            return Err(EngineError::Invalid(duplicates));
        }

        debug!(
            "loading schedule snapshot for institution '{}'",
            request.institution
        );
        let snapshot = store.entries_for_institution(&request.institution)?;

        debug!("indexing {} existing entries", snapshot.len());
        let mut index = ConflictIndex::from_entries(&snapshot);

        let mut batch = ReplaceBatch::new();
        let mut placed = 0usize;
        let mut unresolved = 0usize;

        for section_id in &request.section_ids {
            // Section ids are unique across institutions, so old entries
            // are keyed out by section id alone.
            batch.delete_section(section_id);

            let mut pool = build_pool(&request.course, &request.allocations, self.slots);
            self.ordering.arrange(&mut pool);
            debug!(
                "section '{}': pool of {} lectures ({})",
                section_id,
                pool.len(),
                self.ordering.name()
            );

            for slot in 0..self.slots {
                if pool.is_empty() {
                    unresolved += self.slots - slot;
                    break;
                }

                match pool
                    .iter()
                    .position(|lec| !index.is_busy(&lec.teacher_id, slot))
                {
                    Some(i) => {
                        let lecture = pool.remove(i);
                        let entry = ScheduleEntry::new(
                            section_id,
                            &request.course.id,
                            slot,
                            &lecture.teacher_id,
                            &lecture.subject,
                            &request.institution,
                        );
                        index.record(&entry);
                        batch.insert(entry);
                        placed += 1;
                    }
                    None => unresolved += 1,
                }
            }
        }

        debug!(
            "committing {} inserts, {} section replacements",
            batch.insert_count(),
            batch.delete_count()
        );
        store.commit(batch)?;

        if unresolved > 0 {
            warn!("{unresolved} slots left unassigned due to teacher unavailability");
            Ok(RunReport {
                status: RunStatus::SucceededWithConflicts,
                placed,
                unresolved,
            })
        } else {
            info!(
                "generated {placed} entries for {} sections",
                request.section_ids.len()
            );
            Ok(RunReport {
                status: RunStatus::Succeeded,
                placed,
                unresolved,
            })
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
