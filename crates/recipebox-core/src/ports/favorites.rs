//! Favorites store port.
//!
//! The favorites collection is shared application-wide and owned by the
//! store. This crate reads membership and issues add/remove intents; it never
//! mutates the collection directly.

use thiserror::Error;

use crate::domain::RecipeId;

/// Errors a favorites store may report for a mutation intent.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// The store cannot be reached right now.
    #[error("Favorites store unavailable: {0}")]
    Unavailable(String),

    /// The store accepted the intent but failed to apply it.
    #[error("Favorites storage error: {0}")]
    Storage(String),
}

/// Shared collection of favorited recipe ids.
///
/// # Contract
///
/// - Each id appears at most once.
/// - `add` of a present id and `remove` of an absent id are no-ops.
/// - Each intent is applied atomically.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait FavoritesStore: Send + Sync {
    /// Current members, in no particular order.
    fn favorites(&self) -> Vec<RecipeId>;

    /// Membership check. Stores with an index should override the scan.
    fn contains(&self, recipe_id: &RecipeId) -> bool {
        self.favorites().iter().any(|id| id == recipe_id)
    }

    fn add(&self, recipe_id: &RecipeId) -> Result<(), FavoritesError>;

    fn remove(&self, recipe_id: &RecipeId) -> Result<(), FavoritesError>;
}
