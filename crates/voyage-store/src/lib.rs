//! voyage-store: the content store behind the travel journal
//!
//! A small layered stack:
//! - `engine`: string key-value backends (in-memory with optional quota,
//!   one-file-per-key on disk)
//! - `client`: the generic collection store — JSON serialization, a
//!   two-generation backup rotation on every differing write, a version
//!   marker, snapshots, and durable restore
//! - `publication`: pure draft/published reconciliation over
//!   `PublicationState`, plus its persistence wrapper
//! - `journal` / `media` / `places`: repositories for the three persisted
//!   content collections, including the corruption recovery chain that
//!   guarantees the journal never loads empty-handed

pub mod canonical;
pub mod client;
pub mod engine;
pub mod journal;
pub mod media;
pub mod places;
pub mod publication;

pub use canonical::{canonical_day_ids, canonical_entries};
pub use client::{BackupSlot, CollectionStore, StorageSnapshot, StoreError, WriteReceipt};
pub use engine::{EngineError, FileEngine, MemoryEngine, StorageEngine};
pub use journal::JournalRepository;
pub use media::MediaRepository;
pub use places::PlaceRepository;
pub use publication::{
    count_by_status, ensure_entries, remove_entry, resolve_status, update_status,
    PublicationStore,
};
