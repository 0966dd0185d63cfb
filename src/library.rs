//! # Set Store
//!
//! [`SetLibrary`] owns the in-memory [`Collection`] and is the single
//! writer for it. It upholds two invariants across every operation:
//!
//! - exactly one set carries `is_default`, and that set is never deleted;
//! - `selected_set_id` always resolves to an existing set.
//!
//! Every successful mutation is followed by a persistence write through the
//! injected [`StorageBackend`]. A failed write is returned to the caller but
//! never rolls the in-memory state back; the running process stays the
//! source of truth. Mutations that reference a missing set or card are
//! silent no-ops rather than errors, because the presentation layer drives
//! these calls and a stale id (say, a duplicate delete) must not crash
//! anything.

use crate::error::Result;
use crate::model::{Collection, Flashcard, FlashcardSet};
use crate::storage::StorageBackend;
use log::{debug, warn};
use uuid::Uuid;

/// The Set Store facade. Generic over [`StorageBackend`] so tests run
/// against [`crate::storage::memory::MemoryStore`] and production against
/// [`crate::storage::fs::FileStore`].
pub struct SetLibrary<S: StorageBackend> {
    store: S,
    collection: Collection,
}

impl<S: StorageBackend> SetLibrary<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            collection: Collection::default(),
        }
    }

    /// Load the persisted collection, reconcile the default set and the
    /// selection, and write the reconciled state back once.
    ///
    /// A load error is logged and treated like a first run: the starter
    /// set is reseeded so bad data on disk never blocks startup. The
    /// returned `Result` carries only the outcome of the persistence
    /// write; the in-memory state is ready either way.
    pub fn initialize(&mut self) -> Result<()> {
        self.collection = match self.store.load() {
            Ok(Some(collection)) => collection,
            Ok(None) => Collection::default(),
            Err(err) => {
                warn!("could not load collection, starting fresh: {}", err);
                Collection::default()
            }
        };
        self.reconcile();
        self.persist()
    }

    /// Append a new set, make it the selection, persist. The default flag
    /// is forced off; only the seeded starter set may carry it.
    pub fn add_set(&mut self, mut set: FlashcardSet) -> Result<()> {
        set.is_default = false;
        self.collection.selected_set_id = Some(set.id);
        self.collection.sets.push(set);
        self.persist()
    }

    /// Replace the set with the matching id in place. Position in the
    /// list, creation time, and the default flag of the stored entry are
    /// preserved. Unknown id is a no-op.
    pub fn update_set(&mut self, set: FlashcardSet) -> Result<()> {
        let Some(existing) = self.collection.sets.iter_mut().find(|s| s.id == set.id) else {
            return Ok(());
        };
        let created_at = existing.created_at;
        let is_default = existing.is_default;
        *existing = set;
        existing.created_at = created_at;
        existing.is_default = is_default;
        self.persist()
    }

    /// Remove a set and all its cards. The default set and unknown ids
    /// are no-ops. If the removed set was selected, the selection falls
    /// back to the default set.
    pub fn delete_set(&mut self, id: Uuid) -> Result<()> {
        let Some(pos) = self.collection.sets.iter().position(|s| s.id == id) else {
            return Ok(());
        };
        if self.collection.sets[pos].is_default {
            debug!("refusing to delete default set {}", id);
            return Ok(());
        }
        self.collection.sets.remove(pos);
        if self.collection.selected_set_id == Some(id) {
            self.collection.selected_set_id = self.collection.default_set().map(|s| s.id);
        }
        self.persist()
    }

    /// Append a card to the set with the given id. Unknown set is a no-op.
    pub fn add_card(&mut self, card: Flashcard, set_id: Uuid) -> Result<()> {
        let Some(set) = self.set_mut(set_id) else {
            return Ok(());
        };
        set.cards.push(card);
        self.persist()
    }

    /// Replace the card with the matching id inside the given set.
    /// Unknown set or card is a no-op.
    pub fn update_card(&mut self, card: Flashcard, set_id: Uuid) -> Result<()> {
        let Some(set) = self.set_mut(set_id) else {
            return Ok(());
        };
        let Some(existing) = set.cards.iter_mut().find(|c| c.id == card.id) else {
            return Ok(());
        };
        *existing = card;
        self.persist()
    }

    /// Remove a card from the given set. Unknown set or card is a no-op.
    pub fn delete_card(&mut self, card_id: Uuid, set_id: Uuid) -> Result<()> {
        let Some(set) = self.set_mut(set_id) else {
            return Ok(());
        };
        let Some(pos) = set.cards.iter().position(|c| c.id == card_id) else {
            return Ok(());
        };
        set.cards.remove(pos);
        self.persist()
    }

    /// Repoint the selection. Ids that do not resolve are ignored, so the
    /// selection invariant cannot be broken from outside.
    pub fn select_set(&mut self, id: Uuid) -> Result<()> {
        if self.collection.set_by_id(id).is_none() {
            return Ok(());
        }
        self.collection.selected_set_id = Some(id);
        self.persist()
    }

    pub fn sets(&self) -> &[FlashcardSet] {
        &self.collection.sets
    }

    pub fn selected_set(&self) -> Option<&FlashcardSet> {
        self.collection
            .selected_set_id
            .and_then(|id| self.collection.set_by_id(id))
    }

    pub fn default_set(&self) -> Option<&FlashcardSet> {
        self.collection.default_set()
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Guarantee exactly one default set exists and the selection resolves.
    fn reconcile(&mut self) {
        if self.collection.default_set().is_none() {
            let starter = FlashcardSet::starter();
            debug!("no default set found, seeding starter set {}", starter.id);
            self.collection.selected_set_id = Some(starter.id);
            self.collection.sets.push(starter);
        }
        // Tampered or hand-edited records may carry several default flags;
        // the first one wins, the rest are demoted.
        for set in self
            .collection
            .sets
            .iter_mut()
            .filter(|s| s.is_default)
            .skip(1)
        {
            debug!("demoting extra default set {}", set.id);
            set.is_default = false;
        }
        let selection_resolves = self
            .collection
            .selected_set_id
            .map(|id| self.collection.set_by_id(id).is_some())
            .unwrap_or(false);
        if !selection_resolves {
            self.collection.selected_set_id = self.collection.default_set().map(|s| s.id);
        }
    }

    fn set_mut(&mut self, id: Uuid) -> Option<&mut FlashcardSet> {
        self.collection.sets.iter_mut().find(|s| s.id == id)
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.collection)
    }
}
