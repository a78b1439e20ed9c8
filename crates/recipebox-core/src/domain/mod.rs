//! Pure domain types for the recipe details screen.
//!
//! Nothing in here talks to a store, an engine or a navigation host; those
//! are reached through [`crate::ports`].

mod content;
mod hint;
mod language;
mod navigation;
mod recipe;

use thiserror::Error;

pub use content::{DirectionList, IngredientList};
pub use hint::{InfoHint, InfoHintState};
pub use language::{LanguageCode, MeasurementSystem};
pub use navigation::{EventDisposition, ListenerId, ScreenEventKind, ScreenId};
pub use recipe::{CategoryId, IngredientSetId, LocalizedText, Recipe, RecipeId};

/// Validation and parsing errors for domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A language-keyed recipe field lacks an entry for a supported language.
    #[error("Recipe {recipe_id} has no {field} for language '{language}'")]
    MissingTranslation {
        recipe_id: RecipeId,
        field: &'static str,
        language: LanguageCode,
    },

    #[error("Unknown language code '{0}' (expected one of: en, fr)")]
    UnknownLanguage(String),

    #[error("Unknown measurement system '{0}' (expected metric or imperial)")]
    UnknownMeasurement(String),
}
