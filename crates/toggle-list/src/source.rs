//! Record Sources
//!
//! Abstract load/toggle interface a view talks to. The in-memory
//! `SeedSource` stands in for a backend; a persistent implementation can
//! replace it without touching call sites.

use serde::de::DeserializeOwned;

use crate::error::{StoreError, StoreResult};
use crate::record::{Payload, Record, RecordId};
use crate::store::ToggleListStore;

/// Load and toggle records of one list kind
pub trait RecordSource<P: Payload + Clone> {
    /// Current records, in order
    fn load(&self) -> StoreResult<ToggleListStore<P>>;

    /// Flip record `id` and return the records after the change
    ///
    /// Activating a full record fails with `CapacityReached`. An unknown id
    /// is not an error: the records come back unchanged.
    fn toggle(&mut self, id: RecordId) -> StoreResult<ToggleListStore<P>>;
}

/// In-memory source seeded from a fixed list
#[derive(Debug, Clone)]
pub struct SeedSource<P> {
    store: ToggleListStore<P>,
}

impl<P> Default for SeedSource<P> {
    fn default() -> Self {
        Self::new(ToggleListStore::default())
    }
}

impl<P> SeedSource<P> {
    pub fn new(store: ToggleListStore<P>) -> Self {
        Self { store }
    }

    /// Seed from records, validating ids and counters
    pub fn from_records(records: Vec<Record<P>>) -> StoreResult<Self> {
        ToggleListStore::from_records(records).map(Self::new)
    }
}

impl<P: DeserializeOwned> SeedSource<P> {
    /// Seed from a JSON array of records
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let records: Vec<Record<P>> = serde_json::from_str(json)?;
        Self::from_records(records)
    }
}

impl<P: Payload + Clone> RecordSource<P> for SeedSource<P> {
    fn load(&self) -> StoreResult<ToggleListStore<P>> {
        Ok(self.store.clone())
    }

    fn toggle(&mut self, id: RecordId) -> StoreResult<ToggleListStore<P>> {
        match self.store.try_toggle(id) {
            Ok(next) => {
                self.store = next;
                Ok(self.store.clone())
            }
            Err(StoreError::NotFound(_)) => Ok(self.store.clone()),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Room {
        title: String,
        seats: u32,
    }

    impl Payload for Room {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str()]
        }

        fn capacity(&self) -> Option<u32> {
            Some(self.seats)
        }
    }

    const ROOMS: &str = r#"[
        {"id": 1, "counter": 1, "title": "Workshop", "seats": 2},
        {"id": 2, "active": true, "counter": 2, "title": "Gala", "seats": 2}
    ]"#;

    #[test]
    fn test_load_from_json() {
        let source = SeedSource::<Room>::from_json(ROOMS).unwrap();
        let store = source.load().unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(2).unwrap().payload().title, "Gala");
    }

    #[test]
    fn test_invalid_json_is_seed_error() {
        let err = SeedSource::<Room>::from_json("[{\"id\": 1}").unwrap_err();
        assert!(matches!(err, StoreError::Seed(_)));
    }

    #[test]
    fn test_toggle_persists_between_calls() {
        let mut source = SeedSource::<Room>::from_json(ROOMS).unwrap();
        let after = source.toggle(1).unwrap();
        assert_eq!(after.get(1).unwrap().counter(), Some(2));
        assert_eq!(source.load().unwrap(), after);
    }

    #[test]
    fn test_toggle_unknown_id_returns_unchanged() {
        let mut source = SeedSource::<Room>::from_json(ROOMS).unwrap();
        let before = source.load().unwrap();
        assert_eq!(source.toggle(99).unwrap(), before);
    }

    #[test]
    fn test_leaving_full_record_is_allowed() {
        let mut source = SeedSource::<Room>::from_json(ROOMS).unwrap();
        let freed = source.toggle(2).unwrap();
        assert!(!freed.get(2).unwrap().is_active());
        assert_eq!(freed.get(2).unwrap().counter(), Some(1));

        let filled = source.toggle(1).unwrap();
        assert!(filled.get(1).unwrap().is_active());
        assert!(filled.get(1).unwrap().is_full());
    }

    #[test]
    fn test_toggle_at_capacity_errors() {
        let mut source = SeedSource::<Room>::from_records(vec![
            Record::new(5, Room { title: "Dinner".to_string(), seats: 3 }).with_counter(3),
        ])
        .unwrap();
        let err = source.toggle(5).unwrap_err();
        assert_eq!(err, StoreError::CapacityReached { id: 5, capacity: 3 });
        assert!(!source.load().unwrap().get(5).unwrap().is_active());
    }
}
