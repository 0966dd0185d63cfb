use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author-assigned difficulty label. Independent from the session-level
/// "difficult" bucket, which is a per-session recall tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: Uuid,
    pub front: String,
    pub back: String,
    pub topic: String,
    pub difficulty: Difficulty,
}

impl Flashcard {
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        topic: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            front: front.into(),
            back: back.into(),
            topic: topic.into(),
            difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardSet {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cards: Vec<Flashcard>,
    pub created_at: DateTime<Utc>,
    pub is_default: bool,
}

impl FlashcardSet {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            cards: Vec::new(),
            created_at: Utc::now(),
            is_default: false,
        }
    }

    /// The seeded default set, created once on first run so the app is
    /// never empty.
    pub fn starter() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Getting Started".to_string(),
            description: "A starter deck that explains how studying with cardbox works."
                .to_string(),
            cards: seed_deck(),
            created_at: Utc::now(),
            is_default: true,
        }
    }

    pub fn card(&self, id: Uuid) -> Option<&Flashcard> {
        self.cards.iter().find(|c| c.id == id)
    }
}

/// The persisted aggregate: every set the user owns, plus which one is
/// currently selected. Serialized as a single JSON record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub sets: Vec<FlashcardSet>,
    pub selected_set_id: Option<Uuid>,
}

impl Collection {
    pub fn set_by_id(&self, id: Uuid) -> Option<&FlashcardSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    pub fn default_set(&self) -> Option<&FlashcardSet> {
        self.sets.iter().find(|s| s.is_default)
    }
}

/// Editor state for the presentation layer: either composing a new card or
/// editing one identified by id. Replaces passing an optional card reference
/// through mutable view fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Creating,
    Editing(Uuid),
}

/// The fixed introductory deck used to populate the default set.
pub fn seed_deck() -> Vec<Flashcard> {
    vec![
        Flashcard::new(
            "What is active recall?",
            "Retrieving an answer from memory before revealing it.",
            "Study technique",
            Difficulty::Easy,
        ),
        Flashcard::new(
            "What does flipping a card do?",
            "Reveals the answer side so you can check yourself.",
            "Basics",
            Difficulty::Easy,
        ),
        Flashcard::new(
            "When can a card be rated known or difficult?",
            "Only after it has been flipped to the answer side.",
            "Basics",
            Difficulty::Easy,
        ),
        Flashcard::new(
            "What is the difficult bucket?",
            "A manual tag for cards you want to revisit. It is not a scheduler.",
            "Basics",
            Difficulty::Medium,
        ),
        Flashcard::new(
            "What does shuffle do?",
            "Reorders the current cards into a random permutation.",
            "Basics",
            Difficulty::Easy,
        ),
        Flashcard::new(
            "What happens past the last card?",
            "Navigation wraps around to the first card.",
            "Basics",
            Difficulty::Medium,
        ),
        Flashcard::new(
            "Why study in short sessions?",
            "Spaced, repeated practice beats one long sitting.",
            "Study technique",
            Difficulty::Medium,
        ),
        Flashcard::new(
            "Why write your own cards?",
            "Formulating the question is itself a form of studying.",
            "Study technique",
            Difficulty::Hard,
        ),
    ]
}
