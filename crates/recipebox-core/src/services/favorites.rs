//! Favorites toggle - flips one recipe's membership in the shared store.

use std::sync::Arc;

use crate::domain::RecipeId;
use crate::ports::{FavoritesError, FavoritesStore};

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteStatus {
    Added,
    Removed,
}

impl FavoriteStatus {
    /// Whether the recipe is a favorite after the toggle.
    pub const fn is_favorite(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Service for favorite membership reads and toggles.
///
/// Issues the opposite intent of the current membership. Deduplication and
/// atomicity are the store's job.
#[derive(Clone)]
pub struct FavoritesToggle {
    store: Arc<dyn FavoritesStore>,
}

impl FavoritesToggle {
    pub fn new(store: Arc<dyn FavoritesStore>) -> Self {
        Self { store }
    }

    pub fn is_favorite(&self, recipe_id: &RecipeId) -> bool {
        self.store.contains(recipe_id)
    }

    /// Remove the recipe if it is a favorite, add it otherwise.
    pub fn toggle(&self, recipe_id: &RecipeId) -> Result<FavoriteStatus, FavoritesError> {
        if self.is_favorite(recipe_id) {
            self.store.remove(recipe_id)?;
            tracing::info!(recipe_id = %recipe_id, "Removed recipe from favorites");
            Ok(FavoriteStatus::Removed)
        } else {
            self.store.add(recipe_id)?;
            tracing::info!(recipe_id = %recipe_id, "Added recipe to favorites");
            Ok(FavoriteStatus::Added)
        }
    }
}
