//! End-to-end test of the Set Store over the file backend: everything a
//! fresh process would do, twice, against the same data directory.

use cardbox::library::SetLibrary;
use cardbox::model::{Difficulty, Flashcard, FlashcardSet};
use cardbox::session::{StudyMode, StudySession};
use cardbox::storage::fs::FileStore;
use tempfile::tempdir;

#[test]
fn first_run_then_reopen_preserves_everything() {
    let dir = tempdir().unwrap();

    // First run: seeded default, one user set with one card.
    let stars_id;
    let card_id;
    {
        let mut library = SetLibrary::new(FileStore::new(dir.path().to_path_buf()));
        library.initialize().unwrap();
        assert_eq!(library.sets().len(), 1);
        assert_eq!(library.default_set().unwrap().cards.len(), 8);

        let stars = FlashcardSet::new("Stars", "Astronomy basics");
        stars_id = stars.id;
        library.add_set(stars).unwrap();

        let card = Flashcard::new(
            "What is the closest star?",
            "The Sun",
            "astronomy",
            Difficulty::Easy,
        );
        card_id = card.id;
        library.add_card(card, stars_id).unwrap();
    }

    // Second run: everything is back, selection included.
    let mut library = SetLibrary::new(FileStore::new(dir.path().to_path_buf()));
    library.initialize().unwrap();

    assert_eq!(library.sets().len(), 2);
    let stars = library.selected_set().unwrap();
    assert_eq!(stars.id, stars_id);
    assert_eq!(stars.name, "Stars");
    assert_eq!(stars.cards.len(), 1);
    assert_eq!(stars.card(card_id).unwrap().back, "The Sun");

    // Still exactly one default set after the reload.
    assert_eq!(library.sets().iter().filter(|s| s.is_default).count(), 1);
}

#[test]
fn corrupt_data_file_reseeds_on_startup() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("collection.json"), "{ truncated").unwrap();

    let mut library = SetLibrary::new(FileStore::new(dir.path().to_path_buf()));
    library.initialize().unwrap();

    assert_eq!(library.sets().len(), 1);
    assert!(library.selected_set().unwrap().is_default);

    // The reseeded state overwrote the corrupt record.
    let mut reopened = SetLibrary::new(FileStore::new(dir.path().to_path_buf()));
    reopened.initialize().unwrap();
    assert_eq!(reopened.sets().len(), 1);
}

#[test]
fn deleting_the_selected_set_survives_a_restart() {
    let dir = tempdir().unwrap();

    {
        let mut library = SetLibrary::new(FileStore::new(dir.path().to_path_buf()));
        library.initialize().unwrap();
        let set = FlashcardSet::new("Ephemeral", "");
        let id = set.id;
        library.add_set(set).unwrap();
        library.delete_set(id).unwrap();
    }

    let mut library = SetLibrary::new(FileStore::new(dir.path().to_path_buf()));
    library.initialize().unwrap();
    assert_eq!(library.sets().len(), 1);
    assert!(library.selected_set().unwrap().is_default);
}

#[test]
fn study_flow_over_a_persisted_set() {
    let dir = tempdir().unwrap();
    let mut library = SetLibrary::new(FileStore::new(dir.path().to_path_buf()));
    library.initialize().unwrap();

    // Study the seed deck: rate the first two cards.
    let mut session = StudySession::new(library.selected_set().unwrap());
    assert_eq!(session.active_count(), 8);

    session.flip();
    session.mark_difficult();
    session.flip();
    session.mark_known();
    assert_eq!(session.position(), 2);

    session.set_mode(StudyMode::Difficult);
    assert_eq!(session.active_count(), 1);
    assert_eq!(session.progress_percent(), 100.0);

    // Session state is transient: nothing about it reached the disk.
    let mut reopened = SetLibrary::new(FileStore::new(dir.path().to_path_buf()));
    reopened.initialize().unwrap();
    assert_eq!(reopened.default_set().unwrap().cards.len(), 8);
}
