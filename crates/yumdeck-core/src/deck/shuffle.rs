//! Pluggable permutation of the session queue.
//!
//! Shuffling exists for presentation variety, not security or
//! reproducibility. No cross-session determinism is promised; tests inject
//! deterministic implementations so ordering-sensitive assertions stay
//! stable.

use crate::recipe::Recipe;
use rand::seq::SliceRandom;

/// A permutation capability for the session queue.
pub trait Shuffler: Send {
    /// Permutes `recipes` in place.
    fn shuffle(&mut self, recipes: &mut [Recipe]);
}

/// Fisher-Yates shuffle backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngShuffler;

impl Shuffler for ThreadRngShuffler {
    fn shuffle(&mut self, recipes: &mut [Recipe]) {
        recipes.shuffle(&mut rand::thread_rng());
    }
}

/// Keeps the input order unchanged. Useful for tests and reproducible runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&mut self, _recipes: &mut [Recipe]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Difficulty, Recipe};

    fn recipes(ids: &[&str]) -> Vec<Recipe> {
        ids.iter()
            .map(|id| Recipe {
                id: id.to_string(),
                name: id.to_string(),
                cuisine: "Test".to_string(),
                cook_time: 5,
                difficulty: Difficulty::Easy,
                description: String::new(),
                tags: Vec::new(),
                calories: 100,
                servings: 1,
                category: "Dinner".to_string(),
                emoji: "🍽".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_identity_shuffler_keeps_order() {
        let mut deck = recipes(&["a", "b", "c"]);
        IdentityShuffler.shuffle(&mut deck);
        let ids: Vec<&str> = deck.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_thread_rng_shuffler_is_a_permutation() {
        let mut deck = recipes(&["a", "b", "c", "d", "e"]);
        ThreadRngShuffler.shuffle(&mut deck);
        let mut ids: Vec<&str> = deck.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }
}
