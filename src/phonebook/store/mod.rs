//! # Storage Layer
//!
//! Two halves live here:
//!
//! 1. [`record_store::RecordStore`]: the in-memory, insertion-ordered collection of
//!    records. It owns id assignment and duplicate-number detection and is where
//!    every mutation happens.
//! 2. [`StorageBackend`]: loads and saves whole snapshots of that collection.
//!
//! ## Design Rationale
//!
//! Persistence is abstracted behind a trait so that:
//! - Command and API tests run against [`memory::MemBackend`] with no filesystem
//! - The JSON file format stays an implementation detail of [`fs::JsonFileBackend`]
//!
//! ## Snapshot Semantics
//!
//! The phone book is read once at start-up and written once at exit. `save`
//! always overwrites the previous snapshot with the full current sequence.
//!
//! ## Storage Format
//!
//! ```text
//! <data-dir>/
//! ├── database.json   # [{"id": 1, "name": ..., "number": ..., "address": ...}, ...]
//! ├── dataset.txt     # ledger lines, see crate::ledger
//! └── config.json     # PhonebookConfig
//! ```

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;
pub mod record_store;

pub use record_store::RecordStore;

/// Abstract interface for snapshot persistence.
pub trait StorageBackend {
    /// Read every persisted record, in stored order.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the persisted snapshot with `records`.
    fn save(&self, records: &[Record]) -> Result<()>;
}
