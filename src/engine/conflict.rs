//! Teacher conflict index.
//!
//! Answers "is teacher T busy at slot S" in O(1). Seeded once per run
//! from the institution-wide snapshot, then updated incrementally as the
//! allocator places lectures, so later sections in the same run see
//! earlier placements immediately. Placements are never revoked within a
//! run, so no removal operation exists.

use std::collections::{HashMap, HashSet};

use crate::models::ScheduleEntry;

/// In-memory occupancy index over `(teacher, slot)` pairs.
#[derive(Debug, Clone, Default)]
pub struct ConflictIndex {
    busy: HashMap<String, HashSet<usize>>,
}

impl ConflictIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from a snapshot of stored entries.
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.record(entry);
        }
        index
    }

    /// Whether the teacher already gives a lecture at this slot.
    pub fn is_busy(&self, teacher_id: &str, slot: usize) -> bool {
        self.busy
            .get(teacher_id)
            .is_some_and(|slots| slots.contains(&slot))
    }

    /// Marks the entry's teacher as busy at the entry's slot.
    pub fn record(&mut self, entry: &ScheduleEntry) {
        self.busy
            .entry(entry.teacher_id.clone())
            .or_default()
            .insert(entry.slot);
    }

    /// Number of occupied `(teacher, slot)` pairs.
    pub fn occupied(&self) -> usize {
        self.busy.values().map(HashSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(teacher_id: &str, slot: usize) -> ScheduleEntry {
        ScheduleEntry::new("sec-a", "c1", slot, teacher_id, "Math", "inst")
    }

    #[test]
    fn test_empty_index() {
        let index = ConflictIndex::new();
        assert!(!index.is_busy("t1", 0));
        assert_eq!(index.occupied(), 0);
    }

    #[test]
    fn test_seed_from_snapshot() {
        let snapshot = vec![entry("t1", 0), entry("t1", 3), entry("t2", 0)];
        let index = ConflictIndex::from_entries(&snapshot);

        assert!(index.is_busy("t1", 0));
        assert!(index.is_busy("t1", 3));
        assert!(index.is_busy("t2", 0));
        assert!(!index.is_busy("t1", 1));
        assert!(!index.is_busy("t3", 0));
        assert_eq!(index.occupied(), 3);
    }

    #[test]
    fn test_record_is_immediately_visible() {
        let mut index = ConflictIndex::new();
        assert!(!index.is_busy("t1", 5));

        index.record(&entry("t1", 5));
        assert!(index.is_busy("t1", 5));
        assert!(!index.is_busy("t1", 4));
    }

    #[test]
    fn test_record_same_pair_twice() {
        let mut index = ConflictIndex::new();
        index.record(&entry("t1", 2));
        index.record(&entry("t1", 2));
        assert_eq!(index.occupied(), 1);
    }
}
