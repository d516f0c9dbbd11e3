//! Toggle List
//!
//! Ordered record lists where each record carries an on/off flag and an
//! optional counter that moves with it: likes on posts, registrations on
//! events, applications on jobs, connections between members.
//!
//! Layers:
//! - record: `Record<P>` and the `Payload` trait a list kind implements
//! - store: `ToggleListStore<P>`, copy-on-write toggle and text filter
//! - source: `RecordSource` load/toggle interface and the in-memory `SeedSource`

mod error;
mod record;
mod source;
mod store;


pub use error::{StoreError, StoreResult};
pub use record::{Payload, Record, RecordId};
pub use source::{RecordSource, SeedSource};
pub use store::ToggleListStore;
