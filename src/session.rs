//! # Study Session Engine
//!
//! A [`StudySession`] is the transient traversal state over one set's
//! cards: the mode-filtered active sequence, the cursor, the flip state,
//! and the known/difficult recall buckets. Nothing here is ever persisted;
//! dropping the session discards the progress, and
//! [`StudySession::reset_progress`] discards it in place.
//!
//! The active sequence is derived from the source snapshot: filter by
//! [`StudyMode`], then optionally overlay a shuffled permutation. The
//! overlay is cleared whenever the mode or the source set changes, and by
//! a progress reset. It is deliberately NOT cleared when cards are rated
//! mid-session, so the traversal order stays stable within a pass.

use crate::model::{Flashcard, FlashcardSet};
use rand::seq::SliceRandom;
use std::collections::HashSet;
use uuid::Uuid;

/// Which cards from the source set populate the active sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudyMode {
    /// Every card of the source set, in display order.
    #[default]
    All,
    /// Only cards currently tagged difficult in this session.
    Difficult,
}

#[derive(Debug, Clone, Default)]
pub struct StudySession {
    source: Vec<Flashcard>,
    active: Vec<Flashcard>,
    position: usize,
    flipped: bool,
    known: HashSet<Uuid>,
    difficult: HashSet<Uuid>,
    mode: StudyMode,
}

impl StudySession {
    /// A session over the given set, starting in [`StudyMode::All`].
    pub fn new(set: &FlashcardSet) -> Self {
        let mut session = Self::default();
        session.set_source(set);
        session
    }

    /// A session with no source set: no cards available until
    /// [`StudySession::set_source`] is called.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the source snapshot because the selected set changed.
    /// Clears the shuffle overlay, refilters, and resets the cursor and
    /// flip state. The recall buckets survive.
    pub fn set_source(&mut self, set: &FlashcardSet) {
        self.source = set.cards.clone();
        self.refilter();
    }

    /// Switch between studying all cards and only the difficult ones.
    /// Clears the shuffle overlay and resets the cursor and flip state.
    pub fn set_mode(&mut self, mode: StudyMode) {
        self.mode = mode;
        self.refilter();
    }

    /// Replace the active sequence with a random permutation of the
    /// filtered cards and rewind to the first card.
    pub fn shuffle(&mut self) {
        self.refilter();
        self.active.shuffle(&mut rand::thread_rng());
    }

    /// Forget all session progress: both buckets, the cursor, the flip
    /// state, and the shuffle overlay. Mode and source are untouched.
    pub fn reset_progress(&mut self) {
        self.known.clear();
        self.difficult.clear();
        self.refilter();
    }

    /// Toggle between question and answer side. No-op with no cards.
    pub fn flip(&mut self) {
        if self.active.is_empty() {
            return;
        }
        self.flipped = !self.flipped;
    }

    /// Advance to the next card, wrapping past the last one. Always lands
    /// on the question side. No-op with no cards.
    pub fn next(&mut self) {
        if self.active.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.active.len();
        self.flipped = false;
    }

    /// Step back to the previous card, wrapping from the first one.
    /// Always lands on the question side. No-op with no cards.
    pub fn previous(&mut self) {
        if self.active.is_empty() {
            return;
        }
        self.position = (self.position + self.active.len() - 1) % self.active.len();
        self.flipped = false;
    }

    /// Tag the current card as recalled and advance. Only allowed once
    /// the answer side has been seen; otherwise a no-op.
    pub fn mark_known(&mut self) {
        if let Some(id) = self.ratable_card() {
            self.known.insert(id);
            self.next();
        }
    }

    /// Tag the current card as difficult and advance. Only allowed once
    /// the answer side has been seen; otherwise a no-op. Never removes
    /// the card from the known bucket.
    pub fn mark_difficult(&mut self) {
        if let Some(id) = self.ratable_card() {
            self.difficult.insert(id);
            self.next();
        }
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.active.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Traversal progress in percent; 0 when no cards are available.
    pub fn progress_percent(&self) -> f64 {
        if self.active.is_empty() {
            return 0.0;
        }
        (self.position + 1) as f64 / self.active.len() as f64 * 100.0
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    pub fn difficult_count(&self) -> usize {
        self.difficult.len()
    }

    pub fn is_known(&self, id: Uuid) -> bool {
        self.known.contains(&id)
    }

    pub fn is_difficult(&self, id: Uuid) -> bool {
        self.difficult.contains(&id)
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Rebuild the active sequence from the source through the mode
    /// filter, dropping any shuffle overlay.
    fn refilter(&mut self) {
        self.active = match self.mode {
            StudyMode::All => self.source.clone(),
            StudyMode::Difficult => self
                .source
                .iter()
                .filter(|c| self.difficult.contains(&c.id))
                .cloned()
                .collect(),
        };
        self.position = 0;
        self.flipped = false;
    }

    /// The current card's id, but only when classification is allowed.
    fn ratable_card(&self) -> Option<Uuid> {
        if !self.flipped {
            return None;
        }
        self.current_card().map(|c| c.id)
    }
}
