use super::StorageBackend;
use crate::error::{CardboxError, Result};
use crate::model::Collection;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemoryStore {
    collection: Option<Collection>,
    reject_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already-saved record, as if a previous run had
    /// persisted it.
    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection: Some(collection),
            reject_saves: false,
        }
    }

    /// Make every subsequent `save` fail, for exercising error paths.
    pub fn reject_saves(mut self, reject: bool) -> Self {
        self.reject_saves = reject;
        self
    }

    /// The last successfully saved record, if any.
    pub fn saved(&self) -> Option<&Collection> {
        self.collection.as_ref()
    }
}

impl StorageBackend for MemoryStore {
    fn load(&self) -> Result<Option<Collection>> {
        Ok(self.collection.clone())
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        if self.reject_saves {
            return Err(CardboxError::Store("save rejected".to_string()));
        }
        self.collection = Some(collection.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Difficulty, Flashcard, FlashcardSet};

    pub struct StoreFixture {
        pub store: MemoryStore,
        collection: Collection,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
                collection: Collection::default(),
            }
        }

        /// A collection that already holds the seeded default set.
        pub fn seeded(mut self) -> Self {
            let starter = FlashcardSet::starter();
            self.collection.selected_set_id = Some(starter.id);
            self.collection.sets.push(starter);
            self.flush()
        }

        /// Append a user set with `card_count` generated cards.
        pub fn with_set(mut self, name: &str, card_count: usize) -> Self {
            let mut set = FlashcardSet::new(name, "");
            for i in 0..card_count {
                set.cards.push(Flashcard::new(
                    format!("Question {}", i + 1),
                    format!("Answer {}", i + 1),
                    "fixture",
                    Difficulty::Easy,
                ));
            }
            self.collection.sets.push(set);
            self.flush()
        }

        pub fn selecting(mut self, id: uuid::Uuid) -> Self {
            self.collection.selected_set_id = Some(id);
            self.flush()
        }

        fn flush(mut self) -> Self {
            self.store = MemoryStore::with_collection(self.collection.clone());
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FlashcardSet;

    #[test]
    fn empty_store_loads_none() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        let collection = Collection {
            sets: vec![FlashcardSet::starter()],
            selected_set_id: None,
        };
        store.save(&collection).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), collection);
    }

    #[test]
    fn rejected_save_keeps_previous_record() {
        let collection = Collection {
            sets: vec![FlashcardSet::starter()],
            selected_set_id: None,
        };
        let mut store = MemoryStore::with_collection(collection.clone()).reject_saves(true);

        let result = store.save(&Collection::default());
        assert!(matches!(result, Err(CardboxError::Store(_))));
        assert_eq!(store.saved().unwrap(), &collection);
    }
}
