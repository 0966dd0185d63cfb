//! # Storage Layer
//!
//! The [`StorageBackend`] trait is the persistence adapter for the set
//! library: one serialized [`Collection`] record, loaded on startup and
//! rewritten after every mutation.
//!
//! ## Contract
//!
//! - `load` returns `Ok(None)` when no record exists. A first run is a
//!   normal state, never an error; `Err` is reserved for real failures
//!   (unreadable file, corrupt data).
//! - `save` replaces the full record atomically from the caller's
//!   perspective: a reader sees either the old record or the new one,
//!   never a partial write.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single `collection.json`
//!   under an injected root directory.
//! - [`memory::MemoryStore`]: in-memory storage for tests. No persistence,
//!   can be told to reject saves to exercise error paths.

use crate::error::Result;
use crate::model::Collection;

pub mod fs;
pub mod memory;

/// Abstract interface for collection persistence.
pub trait StorageBackend {
    /// Load the previously saved collection, or `None` if nothing was
    /// ever saved.
    fn load(&self) -> Result<Option<Collection>>;

    /// Serialize and durably replace the stored collection.
    fn save(&mut self, collection: &Collection) -> Result<()>;
}
