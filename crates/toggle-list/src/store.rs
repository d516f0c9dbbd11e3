//! Toggle List Store
//!
//! Ordered, copy-on-write collection of records. Every mutation returns a
//! new store and leaves the receiver untouched, so a view can keep the old
//! value in a signal and swap in the new one.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::record::{Payload, Record, RecordId};

/// Records in insertion order with unique ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToggleListStore<P> {
    records: Vec<Record<P>>,
}

impl<P> Default for ToggleListStore<P> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

/// Deserialized stores go through the same checks as `from_records`
impl<'de, P: Deserialize<'de>> Deserialize<'de> for ToggleListStore<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record<P>>::deserialize(deserializer)?;
        Self::from_records(records).map_err(serde::de::Error::custom)
    }
}

impl<P> ToggleListStore<P> {
    /// Build a store from seed records, keeping their order
    ///
    /// Rejects duplicate ids and records whose counter cannot move with
    /// their flag (active at zero, inactive at `u32::MAX`).
    pub fn from_records(records: Vec<Record<P>>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(StoreError::DuplicateId(record.id()));
            }
            if !record.has_consistent_counter() {
                return Err(StoreError::InvalidCounter(record.id()));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record<P>] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<P>> {
        self.records.iter()
    }

    /// Find a record by id
    pub fn get(&self, id: RecordId) -> Option<&Record<P>> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose flag is set
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_active()).count()
    }

    pub fn into_records(self) -> Vec<Record<P>> {
        self.records
    }
}

impl<P: Clone> ToggleListStore<P> {
    /// Flip the flag of record `id` and return the updated store
    ///
    /// An unknown id returns an unchanged copy. No capacity check.
    pub fn toggle(&self, id: RecordId) -> Self {
        let mut next = self.clone();
        match next.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                record.flip();
                log::debug!(
                    "toggled record {} -> active={} counter={:?}",
                    id,
                    record.is_active(),
                    record.counter()
                );
            }
            None => log::debug!("toggle ignored, no record {}", id),
        }
        next
    }
}

impl<P: Clone + Payload> ToggleListStore<P> {
    /// Like `toggle`, but reports unknown ids and refuses to activate a
    /// record that is already at capacity
    pub fn try_toggle(&self, id: RecordId) -> StoreResult<Self> {
        let record = self.get(id).ok_or(StoreError::NotFound(id))?;
        if !record.is_active() && record.is_full() {
            let capacity = record.payload().capacity().unwrap_or_default();
            return Err(StoreError::CapacityReached { id, capacity });
        }
        Ok(self.toggle(id))
    }
}

impl<P: Payload> ToggleListStore<P> {
    /// Records whose searchable fields contain `query`, ignoring case
    ///
    /// An empty query matches everything. Order follows the store.
    pub fn filter(&self, query: &str) -> Vec<&Record<P>> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches(&needle))
            .collect()
    }
}

impl<'a, P> IntoIterator for &'a ToggleListStore<P> {
    type Item = &'a Record<P>;
    type IntoIter = std::slice::Iter<'a, Record<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note(&'static str);

    impl Payload for Note {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Label {
        name: String,
    }

    impl Payload for Label {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }
    }

    fn store() -> ToggleListStore<Note> {
        ToggleListStore::from_records(vec![
            Record::new(1, Note("alpha")).with_counter(0),
            Record::new(2, Note("beta")).with_active(true).with_counter(5),
            Record::new(3, Note("gamma")),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_records_rejects_duplicate_ids() {
        let err = ToggleListStore::from_records(vec![
            Record::new(1, Note("a")),
            Record::new(1, Note("b")),
        ])
        .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(1));
    }

    #[test]
    fn test_from_records_rejects_active_zero_counter() {
        let err = ToggleListStore::from_records(vec![
            Record::new(3, Note("a")).with_active(true).with_counter(0),
        ])
        .unwrap_err();
        assert_eq!(err, StoreError::InvalidCounter(3));
    }

    #[test]
    fn test_from_records_rejects_inactive_max_counter() {
        let err = ToggleListStore::from_records(vec![
            Record::new(1, Note("a")),
            Record::new(4, Note("b")).with_counter(u32::MAX),
        ])
        .unwrap_err();
        assert_eq!(err, StoreError::InvalidCounter(4));
    }

    #[test]
    fn test_deserialize_validates_records() {
        let dup = r#"[{"id": 1, "name": "a"}, {"id": 1, "name": "b"}]"#;
        let err = serde_json::from_str::<ToggleListStore<Label>>(dup).unwrap_err();
        assert!(err.to_string().contains("Duplicate id: 1"));

        let zero = r#"[{"id": 2, "active": true, "counter": 0, "name": "c"}]"#;
        assert!(serde_json::from_str::<ToggleListStore<Label>>(zero).is_err());

        let ok = r#"[{"id": 1, "name": "a"}, {"id": 2, "active": true, "counter": 3, "name": "b"}]"#;
        let store: ToggleListStore<Label> = serde_json::from_str(ok).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(serde_json::to_value(&store).unwrap()[1]["counter"], 3);
    }

    #[test]
    fn test_toggle_leaves_original_untouched() {
        let before = store();
        let after = before.toggle(1);
        assert!(!before.get(1).unwrap().is_active());
        assert!(after.get(1).unwrap().is_active());
        assert_eq!(after.get(1).unwrap().counter(), Some(1));
    }

    #[test]
    fn test_toggle_keeps_order() {
        let after = store().toggle(2).toggle(3);
        let ids: Vec<_> = after.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_active_count() {
        let s = store();
        assert_eq!(s.active_count(), 1);
        assert_eq!(s.toggle(1).toggle(3).active_count(), 3);
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let s = store();
        assert_eq!(s.filter("").len(), 3);
    }

    #[test]
    fn test_filter_substring() {
        let s = store();
        let ids: Vec<_> = s.filter("MM").iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![3]);
        assert!(s.filter("delta").is_empty());
    }
}
