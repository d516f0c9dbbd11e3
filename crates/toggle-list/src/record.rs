//! Record
//!
//! One entry of a toggle list: a stable id, an on/off flag, an optional
//! counter that follows the flag, and a read-only domain payload.

use serde::{Deserialize, Serialize};

/// Unique identifier of a record within its list
pub type RecordId = u32;

/// Domain data carried by a record
///
/// Implemented once per list kind (posts, events, jobs, members). Decides
/// which text `ToggleListStore::filter` searches and whether the counter
/// has an upper bound.
pub trait Payload {
    /// Text fields matched by `filter`, in any order
    fn search_fields(&self) -> Vec<&str>;

    /// Maximum value of the counter, if any
    fn capacity(&self) -> Option<u32> {
        None
    }
}

/// A list entry with a flag and a counter moving in lockstep
///
/// Serialized with the payload flattened into the same object:
/// `{"id": 1, "active": false, "counter": 42, "author": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<P> {
    id: RecordId,
    #[serde(default)]
    active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    counter: Option<u32>,
    #[serde(flatten)]
    payload: P,
}

impl<P> Record<P> {
    /// Create an inactive record without a counter
    pub fn new(id: RecordId, payload: P) -> Self {
        Self {
            id,
            active: false,
            counter: None,
            payload,
        }
    }

    /// Set the initial flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Attach a counter with an initial value
    pub fn with_counter(mut self, count: u32) -> Self {
        self.counter = Some(count);
        self
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn counter(&self) -> Option<u32> {
        self.counter
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// An active record must have counted itself, and an inactive one must
    /// have room to count itself on activation
    pub(crate) fn has_consistent_counter(&self) -> bool {
        match self.counter {
            Some(0) => !self.active,
            Some(u32::MAX) => self.active,
            _ => true,
        }
    }

    /// Flip the flag and move the counter with it
    ///
    /// Stores only hold consistent records. An inconsistent one still flips,
    /// with the counter pinned at its bound.
    pub(crate) fn flip(&mut self) {
        debug_assert!(
            self.has_consistent_counter(),
            "record {} has counter {:?} with active={}",
            self.id,
            self.counter,
            self.active
        );
        self.active = !self.active;
        let (id, active) = (self.id, self.active);
        if let Some(count) = self.counter.as_mut() {
            let moved = if active {
                count.checked_add(1)
            } else {
                count.checked_sub(1)
            };
            match moved {
                Some(next) => *count = next,
                None => log::warn!("record {} counter stuck at {} (active={})", id, count, active),
            }
        }
    }
}

impl<P: Payload> Record<P> {
    /// Whether the counter has reached the payload's capacity
    pub fn is_full(&self) -> bool {
        match (self.counter, self.payload.capacity()) {
            (Some(count), Some(capacity)) => count >= capacity,
            _ => false,
        }
    }

    /// Case-insensitive substring match; `needle` must already be lowercase
    pub(crate) fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .payload
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}
