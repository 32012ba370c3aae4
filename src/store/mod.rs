//! Storage seam: the durable schedule store and the replace batch.
//!
//! The engine never mutates stored entries in place. Each generation run
//! stages deletions (old entries of the regenerated sections) and
//! insertions (newly placed entries) in a [`ReplaceBatch`] and submits
//! the whole batch once. A store must apply the batch atomically: every
//! staged change, or none — no partial schedule is ever observable.

mod memory;

pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::models::ScheduleEntry;

/// Accumulated deletions and insertions for one generation run.
#[derive(Debug, Clone, Default)]
pub struct ReplaceBatch {
    delete_sections: Vec<String>,
    inserts: Vec<ScheduleEntry>,
}

impl ReplaceBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages deletion of every stored entry belonging to a section.
    pub fn delete_section(&mut self, section_id: impl Into<String>) {
        self.delete_sections.push(section_id.into());
    }

    /// Stages a new entry for insertion.
    pub fn insert(&mut self, entry: ScheduleEntry) {
        self.inserts.push(entry);
    }

    /// Sections whose old entries will be deleted.
    pub fn delete_sections(&self) -> &[String] {
        &self.delete_sections
    }

    /// Entries staged for insertion.
    pub fn inserts(&self) -> &[ScheduleEntry] {
        &self.inserts
    }

    /// Number of staged section deletions.
    pub fn delete_count(&self) -> usize {
        self.delete_sections.len()
    }

    /// Number of staged insertions.
    pub fn insert_count(&self) -> usize {
        self.inserts.len()
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.delete_sections.is_empty() && self.inserts.is_empty()
    }

    /// Consumes the batch into its deletions and insertions.
    pub fn into_parts(self) -> (Vec<String>, Vec<ScheduleEntry>) {
        (self.delete_sections, self.inserts)
    }
}

/// A durable store of schedule entries, scoped by institution.
///
/// Reads are plain equality filters over flat entry fields. `commit`
/// must be atomic: a failed commit leaves the store exactly as it was.
pub trait ScheduleStore {
    /// Every entry stored for an institution (conflict-index seeding).
    fn entries_for_institution(
        &self,
        institution: &str,
    ) -> Result<Vec<ScheduleEntry>, StoreError>;

    /// Entries for one section, sorted by slot (timetable view).
    fn entries_for_section(&self, section_id: &str) -> Result<Vec<ScheduleEntry>, StoreError>;

    /// Applies the batch atomically: all staged deletions and
    /// insertions succeed, or none do.
    fn commit(&mut self, batch: ReplaceBatch) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_accumulation() {
        let mut batch = ReplaceBatch::new();
        assert!(batch.is_empty());

        batch.delete_section("sec-a");
        batch.delete_section("sec-b");
        batch.insert(ScheduleEntry::new("sec-a", "c1", 0, "t1", "Math", "inst"));

        assert_eq!(batch.delete_count(), 2);
        assert_eq!(batch.insert_count(), 1);
        assert!(!batch.is_empty());

        // Borrowing accessors expose the staged work without consuming
        // the batch (backends that translate rather than drain use these).
        assert_eq!(batch.delete_sections(), ["sec-a", "sec-b"]);
        assert_eq!(batch.inserts()[0].section_id, "sec-a");
        assert_eq!(batch.inserts()[0].slot, 0);

        let (deletes, inserts) = batch.into_parts();
        assert_eq!(deletes, vec!["sec-a", "sec-b"]);
        assert_eq!(inserts[0].subject, "Math");
    }
}
