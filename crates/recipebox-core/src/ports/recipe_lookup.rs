//! Recipe data lookup port.
//!
//! Localized content is resolved by the recipe data service. Every query is
//! pure and a `None` answer is a lookup miss, not an error: callers render or
//! narrate less instead of failing.

use thiserror::Error;

use crate::domain::{
    CategoryId, DirectionList, DomainError, IngredientList, IngredientSetId, LanguageCode,
    MeasurementSystem, RecipeId,
};

/// Localized recipe content queries.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait RecipeLookup: Send + Sync {
    /// Display name of a category in the given language.
    fn category_name(&self, category_id: CategoryId, language: LanguageCode) -> Option<String>;

    /// Ingredient lines for a set, in the requested unit system.
    fn ingredients(
        &self,
        set_id: IngredientSetId,
        language: LanguageCode,
        measurement: MeasurementSystem,
    ) -> Option<IngredientList>;

    /// Preparation steps for a set, in presentation order.
    fn directions(&self, set_id: IngredientSetId, language: LanguageCode)
    -> Option<DirectionList>;
}

/// Errors raised while loading a recipe catalog into a lookup adapter.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog is not valid JSON: {0}")]
    Parse(String),

    #[error("Invalid catalog entry: {0}")]
    Invalid(#[from] DomainError),

    #[error("Duplicate recipe id in catalog: {0}")]
    DuplicateRecipe(RecipeId),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(RecipeId),
}
