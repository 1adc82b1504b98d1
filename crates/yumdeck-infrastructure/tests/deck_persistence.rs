//! Cross-session persistence tests: the deck engine driven over the
//! file-backed store, simulating multiple application runs against the same
//! data directory.

use std::sync::Arc;
use tempfile::TempDir;
use yumdeck_core::deck::{DeckEngine, Direction, IdentityShuffler};
use yumdeck_core::recipe::{Catalog, Difficulty, Recipe};
use yumdeck_infrastructure::FileKeyValueStore;

fn recipe(id: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: id.to_uppercase(),
        cuisine: "Test".to_string(),
        cook_time: 15,
        difficulty: Difficulty::Easy,
        description: String::new(),
        tags: Vec::new(),
        calories: 200,
        servings: 2,
        category: "Dinner".to_string(),
        emoji: "🍽".to_string(),
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![recipe("a"), recipe("b"), recipe("c")]).unwrap()
}

fn open_engine(dir: &TempDir) -> DeckEngine {
    let store = FileKeyValueStore::new(dir.path());
    DeckEngine::start_session(catalog(), Arc::new(store), Box::new(IdentityShuffler))
}

#[test]
fn seen_recipes_stay_excluded_across_runs() {
    let dir = TempDir::new().unwrap();

    let mut deck = open_engine(&dir);
    assert_eq!(deck.queue_len(), 3);
    deck.decide(Direction::Reject).unwrap();
    deck.decide(Direction::Accept).unwrap();
    drop(deck);

    // Second run: only the undecided recipe is queued.
    let deck = open_engine(&dir);
    assert_eq!(deck.queue_len(), 1);
    assert_eq!(deck.peek_current().unwrap().id, "c");
    assert_eq!(deck.seen_ids().len(), 2);
    assert_eq!(deck.favorite_ids(), ["b".to_string()]);
}

#[test]
fn exhausted_history_replays_the_full_catalog() {
    let dir = TempDir::new().unwrap();

    let mut deck = open_engine(&dir);
    while !deck.is_finished() {
        deck.decide(Direction::Reject).unwrap();
    }
    drop(deck);

    let deck = open_engine(&dir);
    assert_eq!(deck.queue_len(), 3);
    assert!(!deck.is_finished());
}

#[test]
fn reset_survives_restart_and_keeps_favorites() {
    let dir = TempDir::new().unwrap();

    let mut deck = open_engine(&dir);
    deck.decide(Direction::Accept).unwrap();
    deck.decide(Direction::Reject).unwrap();
    deck.reset_session().unwrap();
    drop(deck);

    let deck = open_engine(&dir);
    assert!(deck.seen_ids().is_empty());
    assert_eq!(deck.queue_len(), 3);
    assert_eq!(deck.favorite_ids(), ["a".to_string()]);
}

#[test]
fn fresh_directory_starts_clean() {
    let dir = TempDir::new().unwrap();
    let deck = open_engine(&dir);
    assert!(deck.seen_ids().is_empty());
    assert!(deck.favorite_ids().is_empty());
    assert_eq!(deck.queue_len(), 3);
}
