//! In-memory result collection, newest record first.

pub mod export;

use std::collections::VecDeque;

use uuid::Uuid;

use crate::models::resume::ParsedResume;

#[derive(Debug, Default)]
pub struct ResultStore {
    records: VecDeque<ParsedResume>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record at the head. Identifiers are not checked for duplicates.
    pub fn insert_front(&mut self, record: ParsedResume) {
        self.records.push_front(record);
    }

    /// Removes the first record with `id`. Returns `false` (and changes
    /// nothing) when no record matches.
    pub fn remove_by_id(&mut self, id: Uuid) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&ParsedResume> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records, most recent insertion first.
    pub fn all(&self) -> impl Iterator<Item = &ParsedResume> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::processing_result;

    fn record(name: &str) -> ParsedResume {
        ParsedResume::completed(Uuid::new_v4(), format!("{name}.pdf"), processing_result(name))
    }

    fn names(store: &ResultStore) -> Vec<String> {
        store.all().map(|r| r.contact_info.full_name.clone()).collect()
    }

    #[test]
    fn test_insert_front_puts_newest_first() {
        let mut store = ResultStore::new();
        store.insert_front(record("A"));
        store.insert_front(record("B"));
        store.insert_front(record("C"));

        assert_eq!(names(&store), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = ResultStore::new();
        store.insert_front(record("A"));
        store.insert_front(record("B"));

        assert!(!store.remove_by_id(Uuid::new_v4()));
        assert_eq!(store.len(), 2);
        assert_eq!(names(&store), vec!["B", "A"]);
    }

    #[test]
    fn test_remove_present_id_keeps_relative_order() {
        let mut store = ResultStore::new();
        let middle = record("B");
        let middle_id = middle.id;
        store.insert_front(record("A"));
        store.insert_front(middle);
        store.insert_front(record("C"));

        assert!(store.remove_by_id(middle_id));
        assert_eq!(store.len(), 2);
        assert_eq!(names(&store), vec!["C", "A"]);
        assert!(store.get(middle_id).is_none());
    }

    #[test]
    fn test_get_finds_record() {
        let mut store = ResultStore::new();
        let r = record("A");
        let id = r.id;
        store.insert_front(r);

        assert_eq!(store.get(id).map(|r| r.file_name.as_str()), Some("A.pdf"));
    }

    #[test]
    fn test_empty_store() {
        let store = ResultStore::new();
        assert!(store.is_empty());
        assert_eq!(store.all().count(), 0);
    }
}
