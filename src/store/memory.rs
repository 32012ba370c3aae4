//! In-memory schedule store.
//!
//! Reference implementation for tests and single-process callers.
//! Entries live in a map keyed by a system-generated id. Failure
//! injection (`fail_next_read`, `fail_next_commit`) lets tests exercise
//! the engine's abort and atomicity paths without a real backend.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use crate::error::StoreError;
use crate::models::ScheduleEntry;

use super::{ReplaceBatch, ScheduleStore};

/// Map-backed [`ScheduleStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, ScheduleEntry>,
    next_id: u64,
    // Reads take &self; a Cell lets a one-shot failure clear itself.
    fail_next_read: Cell<bool>,
    fail_next_commit: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Makes the next read fail with [`StoreError::Read`].
    pub fn fail_next_read(&mut self) {
        self.fail_next_read.set(true);
    }

    /// Makes the next commit fail with [`StoreError::Commit`] without
    /// applying anything.
    pub fn fail_next_commit(&mut self) {
        self.fail_next_commit = true;
    }

    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("tt-{:06}", self.next_id)
    }
}

impl ScheduleStore for MemoryStore {
    fn entries_for_institution(
        &self,
        institution: &str,
    ) -> Result<Vec<ScheduleEntry>, StoreError> {
        if self.fail_next_read.take() {
            return Err(StoreError::Read("injected read failure".into()));
        }
        Ok(self
            .entries
            .values()
            .filter(|e| e.institution == institution)
            .cloned()
            .collect())
    }

    fn entries_for_section(&self, section_id: &str) -> Result<Vec<ScheduleEntry>, StoreError> {
        if self.fail_next_read.take() {
            return Err(StoreError::Read("injected read failure".into()));
        }
        let mut entries: Vec<ScheduleEntry> = self
            .entries
            .values()
            .filter(|e| e.section_id == section_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.slot);
        Ok(entries)
    }

    fn commit(&mut self, batch: ReplaceBatch) -> Result<(), StoreError> {
        if self.fail_next_commit {
            self.fail_next_commit = false;
            return Err(StoreError::Commit("injected commit failure".into()));
        }

        // Deletion cannot fail and inserts are fresh keys, so applying
        // in order is atomic for this backend.
        let (deletes, inserts) = batch.into_parts();
        let deletes: HashSet<String> = deletes.into_iter().collect();
        self.entries.retain(|_, e| !deletes.contains(&e.section_id));
        for entry in inserts {
            let id = self.allocate_id();
            self.entries.insert(id, entry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(section_id: &str, slot: usize, institution: &str) -> ScheduleEntry {
        ScheduleEntry::new(section_id, "c1", slot, "t1", "Math", institution)
    }

    fn seeded_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        let mut batch = ReplaceBatch::new();
        batch.insert(entry("sec-a", 2, "inst"));
        batch.insert(entry("sec-a", 0, "inst"));
        batch.insert(entry("sec-b", 1, "inst"));
        batch.insert(entry("sec-x", 0, "other"));
        store.commit(batch).unwrap();
        store
    }

    #[test]
    fn test_institution_filter() {
        let store = seeded_store();
        let inst = store.entries_for_institution("inst").unwrap();
        assert_eq!(inst.len(), 3);
        assert!(inst.iter().all(|e| e.institution == "inst"));
        assert_eq!(store.entries_for_institution("other").unwrap().len(), 1);
        assert!(store.entries_for_institution("unknown").unwrap().is_empty());
    }

    #[test]
    fn test_section_query_sorted_by_slot() {
        let store = seeded_store();
        let a = store.entries_for_section("sec-a").unwrap();
        let slots: Vec<usize> = a.iter().map(|e| e.slot).collect();
        assert_eq!(slots, vec![0, 2]);
    }

    #[test]
    fn test_commit_deletes_then_inserts() {
        let mut store = seeded_store();

        let mut batch = ReplaceBatch::new();
        batch.delete_section("sec-a");
        batch.insert(entry("sec-a", 5, "inst"));
        store.commit(batch).unwrap();

        let a = store.entries_for_section("sec-a").unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].slot, 5);
        // Other sections untouched.
        assert_eq!(store.entries_for_section("sec-b").unwrap().len(), 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_unknown_section_is_noop() {
        let mut store = seeded_store();
        let mut batch = ReplaceBatch::new();
        batch.delete_section("sec-missing");
        store.commit(batch).unwrap();
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_injected_commit_failure_leaves_store_unchanged() {
        let mut store = seeded_store();
        store.fail_next_commit();

        let mut batch = ReplaceBatch::new();
        batch.delete_section("sec-a");
        batch.insert(entry("sec-a", 7, "inst"));
        assert!(matches!(
            store.commit(batch),
            Err(StoreError::Commit(_))
        ));

        assert_eq!(store.len(), 4);
        assert_eq!(store.entries_for_section("sec-a").unwrap().len(), 2);

        // The flag clears after one failure.
        let mut retry = ReplaceBatch::new();
        retry.delete_section("sec-a");
        store.commit(retry).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_injected_read_failure() {
        let mut store = seeded_store();
        store.fail_next_read();
        assert!(matches!(
            store.entries_for_institution("inst"),
            Err(StoreError::Read(_))
        ));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut store = MemoryStore::new();
        for slot in 0..8 {
            let mut batch = ReplaceBatch::new();
            batch.insert(entry("sec-a", slot, "inst"));
            store.commit(batch).unwrap();
        }
        assert_eq!(store.len(), 8);
    }
}
