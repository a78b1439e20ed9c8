//! In-memory favorites store with set semantics.

use std::sync::{Mutex, MutexGuard, PoisonError};

use recipebox_core::{FavoritesError, FavoritesStore, RecipeId};

/// Favorites kept in process memory.
///
/// Insertion order is preserved for display; each id appears at most once.
/// Every intent runs under one lock, so add/remove are atomic.
#[derive(Debug, Default)]
pub struct InMemoryFavoritesStore {
    ids: Mutex<Vec<RecipeId>>,
}

impl InMemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Duplicates in `ids` are collapsed.
    pub fn with_favorites<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = RecipeId>,
    {
        let mut unique: Vec<RecipeId> = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            ids: Mutex::new(unique),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecipeId>> {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FavoritesStore for InMemoryFavoritesStore {
    fn favorites(&self) -> Vec<RecipeId> {
        self.lock().clone()
    }

    fn contains(&self, recipe_id: &RecipeId) -> bool {
        self.lock().contains(recipe_id)
    }

    fn add(&self, recipe_id: &RecipeId) -> Result<(), FavoritesError> {
        let mut ids = self.lock();
        if ids.contains(recipe_id) {
            tracing::debug!(recipe_id = %recipe_id, "Favorite already present");
        } else {
            ids.push(recipe_id.clone());
        }
        Ok(())
    }

    fn remove(&self, recipe_id: &RecipeId) -> Result<(), FavoritesError> {
        let mut ids = self.lock();
        let before = ids.len();
        ids.retain(|id| id != recipe_id);
        if ids.len() == before {
            tracing::debug!(recipe_id = %recipe_id, "Favorite already absent");
        }
        Ok(())
    }
}
