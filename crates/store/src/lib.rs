//! Persistence for generated care events.
//!
//! The schedule engine is stateless; this crate owns the `(pet, rule)`
//! idempotency guard that keeps re-runs from duplicating care events.
//!
//! - [`CareEventStore`]: async storage seam with an in-memory and a
//!   PostgreSQL implementation
//! - [`CareEventSync`]: generate-then-persist driver for one pet

pub mod error;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;
pub mod sync;

pub use error::{Result, StoreError};
pub use memory::MemoryCareEventStore;
pub use postgres::PgCareEventStore;
pub use record::{CareEventRecord, InsertOutcome};
pub use store::CareEventStore;
pub use sync::{CareEventSync, SyncReport};
