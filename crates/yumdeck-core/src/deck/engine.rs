//! The deck engine: session state over the recipe catalog.
//!
//! `DeckEngine` owns the four pieces of session state (seen set, favorite
//! set, session queue, cursor) and exposes the single state transition
//! `decide`. Persistence goes through the injected `KeyValueStore`
//! capability; queue ordering goes through the injected `Shuffler`.
//!
//! All operations are synchronous and complete immediately; operations are
//! totally ordered by call sequence. Concurrent processes sharing the same
//! store race with last-writer-wins semantics, which is an accepted
//! limitation of the storage contract.

use crate::deck::model::{DeckCounts, DeckStatus, Direction, Swipe};
use crate::deck::shuffle::Shuffler;
use crate::error::Result;
use crate::recipe::{Catalog, Recipe};
use crate::storage::keys::{FAVORITES_KEY, SEEN_KEY};
use crate::storage::{KeyValueStore, load_identifier_list, save_identifier_list};
use std::sync::Arc;

/// A card-deck session over the recipe catalog.
///
/// One engine instance corresponds to one session: constructed by
/// [`DeckEngine::start_session`], driven by [`DeckEngine::decide`] until
/// [`DeckEngine::is_finished`], and optionally re-entered via
/// [`DeckEngine::reset_session`].
pub struct DeckEngine {
    catalog: Catalog,
    store: Arc<dyn KeyValueStore>,
    shuffler: Box<dyn Shuffler>,
    /// Identifiers already decided on, in decision order. Persisted.
    seen: Vec<String>,
    /// Identifiers accepted (swiped right), in acceptance order. Persisted.
    favorites: Vec<String>,
    /// This session's queue: catalog minus seen, shuffled. Not persisted.
    queue: Vec<Recipe>,
    cursor: usize,
}

impl DeckEngine {
    /// Starts a session.
    ///
    /// Loads the persisted seen and favorite lists (empty when absent or
    /// corrupt), builds the session queue from the not-yet-seen part of the
    /// catalog, and places the cursor at 0. When every catalog recipe has
    /// already been seen, the full catalog is replayed instead.
    pub fn start_session(
        catalog: Catalog,
        store: Arc<dyn KeyValueStore>,
        mut shuffler: Box<dyn Shuffler>,
    ) -> Self {
        let seen = load_identifier_list(store.as_ref(), SEEN_KEY);
        let favorites = load_identifier_list(store.as_ref(), FAVORITES_KEY);
        let queue = build_queue(&catalog, &seen, shuffler.as_mut());
        tracing::debug!(
            queue_len = queue.len(),
            seen = seen.len(),
            favorites = favorites.len(),
            "deck session started"
        );
        Self {
            catalog,
            store,
            shuffler,
            seen,
            favorites,
            queue,
            cursor: 0,
        }
    }

    /// Applies the user's decision to the current card.
    ///
    /// Marks the current recipe as seen (and as a favorite on
    /// [`Direction::Accept`]), persists the updated lists, and advances the
    /// cursor by exactly one.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Swipe))`: The decision was applied.
    /// - `Ok(None)`: The deck was already finished; the call is a no-op by
    ///   design, not an error.
    /// - `Err(_)`: The store rejected a write. In-memory lists may already
    ///   include the decision; the cursor has not advanced.
    pub fn decide(&mut self, direction: Direction) -> Result<Option<Swipe>> {
        if self.is_finished() {
            tracing::debug!(%direction, "decide ignored: deck already finished");
            return Ok(None);
        }

        let recipe = self.queue[self.cursor].clone();
        if !self.seen.iter().any(|id| id == &recipe.id) {
            self.seen.push(recipe.id.clone());
        }
        save_identifier_list(self.store.as_ref(), SEEN_KEY, &self.seen)?;

        if direction == Direction::Accept {
            if !self.favorites.iter().any(|id| id == &recipe.id) {
                self.favorites.push(recipe.id.clone());
            }
            save_identifier_list(self.store.as_ref(), FAVORITES_KEY, &self.favorites)?;
        }

        self.cursor += 1;
        tracing::debug!(
            recipe = %recipe.id,
            %direction,
            cursor = self.cursor,
            "card decided"
        );
        Ok(Some(Swipe {
            recipe,
            direction,
            cursor: self.cursor,
            finished: self.is_finished(),
        }))
    }

    /// Returns true when the cursor has reached the end of the queue.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    /// Returns the session's lifecycle state.
    pub fn status(&self) -> DeckStatus {
        if self.is_finished() {
            DeckStatus::Finished
        } else {
            DeckStatus::Active
        }
    }

    /// The card currently facing the user, if any.
    pub fn peek_current(&self) -> Option<&Recipe> {
        self.queue.get(self.cursor)
    }

    /// The card behind the current one, if any.
    pub fn peek_next(&self) -> Option<&Recipe> {
        self.queue.get(self.cursor + 1)
    }

    /// Clears the seen history and starts a fresh session over the full
    /// catalog.
    ///
    /// Favorites are deliberately left untouched: saved recipes survive a
    /// "see more" reset, so the favorite set may transiently contain
    /// identifiers no longer marked seen until they are re-swiped.
    pub fn reset_session(&mut self) -> Result<()> {
        self.seen.clear();
        save_identifier_list(self.store.as_ref(), SEEN_KEY, &self.seen)?;
        self.queue = self.catalog.recipes().to_vec();
        self.shuffler.shuffle(&mut self.queue);
        self.cursor = 0;
        tracing::debug!(queue_len = self.queue.len(), "deck session reset");
        Ok(())
    }

    /// Running counters for display.
    pub fn counts(&self) -> DeckCounts {
        DeckCounts {
            seen: self.seen.len(),
            favorited: self.favorites.len(),
            skipped: self.seen.len().saturating_sub(self.favorites.len()),
            remaining: self.queue.len().saturating_sub(self.cursor),
        }
    }

    /// The favorited recipes, resolved against the full catalog in catalog
    /// order. Favorites are resolved against the catalog rather than the
    /// session queue so they remain visible after a reset.
    pub fn favorites(&self) -> Vec<&Recipe> {
        self.catalog.resolve(&self.favorites)
    }

    /// Identifiers decided on so far, in decision order.
    pub fn seen_ids(&self) -> &[String] {
        &self.seen
    }

    /// Identifiers accepted so far, in acceptance order.
    pub fn favorite_ids(&self) -> &[String] {
        &self.favorites
    }

    /// Length of the current session queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The catalog this session runs over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Builds the session queue: catalog minus seen, shuffled; falls back to a
/// reshuffle of the full catalog when everything has been seen.
fn build_queue(catalog: &Catalog, seen: &[String], shuffler: &mut dyn Shuffler) -> Vec<Recipe> {
    let mut queue: Vec<Recipe> = catalog
        .iter()
        .filter(|r| !seen.iter().any(|id| id == &r.id))
        .cloned()
        .collect();
    if queue.is_empty() && !catalog.is_empty() {
        tracing::debug!("catalog exhausted, replaying full deck");
        queue = catalog.recipes().to_vec();
    }
    shuffler.shuffle(&mut queue);
    queue
}
