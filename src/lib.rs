//! # Cardbox Architecture
//!
//! Cardbox is a **UI-agnostic flashcard library**. It owns the data, the
//! invariants, and the session lifecycle; every screen, form, and navigation
//! concern lives in whatever client embeds it.
//!
//! ## The Three Components
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation layer (not in this crate)                     │
//! │  - Renders sets, editors, and the study view                │
//! │  - The ONLY place that knows about widgets or input events  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Set Store (library.rs)                                     │
//! │  - Owns the Collection and the selected-set pointer         │
//! │  - Guarantees exactly one non-deletable default set         │
//! │  - Persists after every successful mutation                 │
//! └─────────────────────────────────────────────────────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌──────────────────────────┐   ┌─────────────────────────────┐
//! │  Storage (storage/)      │   │  Study Session (session.rs) │
//! │  - StorageBackend trait  │   │  - Transient traversal      │
//! │  - FileStore, MemoryStore│   │  - Filter, shuffle, buckets │
//! └──────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Everything here takes regular Rust arguments and returns regular Rust
//! types. Nothing writes to stdout, assumes a terminal, or spawns threads.
//! The same core can sit behind a desktop shell, a TUI, or a web view.
//!
//! ## Ownership Model
//!
//! The [`library::SetLibrary`] exclusively owns the [`model::Collection`];
//! a [`session::StudySession`] owns a snapshot of one set's cards plus its
//! own transient state (position, flip, recall buckets). Clients observe
//! both only through accessors and mutate only through methods, so the
//! invariants cannot be broken from outside.
//!
//! ## Persistence Policy
//!
//! Every mutating [`library::SetLibrary`] call writes the full collection
//! through the injected [`storage::StorageBackend`] before returning. A
//! failed write is returned to the caller but the in-memory state stands:
//! the running process is the source of truth. A failed or corrupt *load*
//! is treated the same as a first run and the starter set is reseeded, so
//! bad data on disk can never block startup.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Flashcard`, `FlashcardSet`, `Collection`)
//! - [`storage`]: Storage abstraction and implementations
//! - [`library`]: The Set Store facade over a storage backend
//! - [`session`]: The transient study session engine
//! - [`paths`]: Default data directory resolution
//! - [`error`]: Error types

pub mod error;
pub mod library;
pub mod model;
pub mod paths;
pub mod session;
pub mod storage;
