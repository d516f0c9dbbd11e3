//! Reactive List State
//!
//! Binds a `RecordSource` to a signal so a view re-renders after each
//! toggle. Created when a view mounts and dropped with it.

use leptos::prelude::*;
use toggle_list::{Payload, Record, RecordId, RecordSource, SeedSource, StoreResult, ToggleListStore};

pub struct ListState<P: Send + Sync + 'static> {
    source: StoredValue<SeedSource<P>>,
    records: RwSignal<ToggleListStore<P>>,
}

impl<P: Send + Sync + 'static> Clone for ListState<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Send + Sync + 'static> Copy for ListState<P> {}

impl<P> ListState<P>
where
    P: Payload + Clone + Send + Sync + 'static,
{
    /// Seed from `source`; a broken seed is logged and yields an empty list
    pub fn new(source: StoreResult<SeedSource<P>>, label: &'static str) -> Self {
        let source = source.unwrap_or_else(|err| {
            log::error!("[{}] failed to seed list: {}", label, err);
            SeedSource::default()
        });
        let initial = source.load().unwrap_or_else(|err| {
            log::error!("[{}] failed to load list: {}", label, err);
            ToggleListStore::default()
        });
        log::debug!("[{}] seeded {} records", label, initial.len());
        Self {
            source: StoredValue::new(source),
            records: RwSignal::new(initial),
        }
    }

    /// All records in order (tracked)
    pub fn records(&self) -> Vec<Record<P>> {
        self.records.with(|store| store.records().to_vec())
    }

    /// Records matching `query` (tracked)
    pub fn filtered(&self, query: &str) -> Vec<Record<P>> {
        self.records
            .with(|store| store.filter(query).into_iter().cloned().collect())
    }

    pub fn get(&self, id: RecordId) -> Option<Record<P>> {
        self.records.with(|store| store.get(id).cloned())
    }

    pub fn active_count(&self) -> usize {
        self.records.with(|store| store.active_count())
    }

    /// Toggle record `id` and publish the result
    ///
    /// Returns the record after the change, or `None` for an unknown id.
    pub fn toggle(&self, id: RecordId) -> StoreResult<Option<Record<P>>> {
        let records = self.records;
        let mut outcome = Ok(None);
        self.source.update_value(|source| {
            outcome = source.toggle(id).map(|next| {
                let record = next.get(id).cloned();
                records.set(next);
                record
            });
        });
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use leptos::reactive::owner::Owner;
    use toggle_list::StoreError;

    #[test]
    fn test_toggle_publishes_new_records() {
        Owner::new().with(|| {
            let posts = ListState::new(seed::feed_source(), "FEED");
            let liked = posts.toggle(1).unwrap().unwrap();
            assert!(liked.is_active());
            assert_eq!(liked.counter(), Some(43));
            assert_eq!(posts.get(1).unwrap().counter(), Some(43));
            assert_eq!(posts.active_count(), 2);
        });
    }

    #[test]
    fn test_unknown_id_returns_none() {
        Owner::new().with(|| {
            let members = ListState::new(seed::member_source(), "NETWORK");
            let before = members.records();
            assert_eq!(members.toggle(9999).unwrap(), None);
            assert_eq!(members.records(), before);
        });
    }

    #[test]
    fn test_filtered() {
        Owner::new().with(|| {
            let jobs = ListState::new(seed::job_source(), "JOBS");
            let hits = jobs.filtered("apple");
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].payload().title, "UX Designer");
            assert_eq!(jobs.filtered("").len(), 4);
        });
    }

    #[test]
    fn test_broken_seed_yields_empty_list() {
        Owner::new().with(|| {
            let broken = ListState::<crate::models::Member>::new(
                Err(StoreError::Seed("truncated".to_string())),
                "NETWORK",
            );
            assert!(broken.records().is_empty());
        });
    }
}
