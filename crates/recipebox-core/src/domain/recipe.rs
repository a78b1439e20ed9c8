//! Recipe entity and its identifiers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DomainError, LanguageCode};

/// Stable identifier of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of a recipe category (breakfast, dessert, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

/// Identifier shared by a recipe's ingredient set and its directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientSetId(pub u32);

/// Text keyed by language code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<LanguageCode, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, language: LanguageCode, text: impl Into<String>) -> Self {
        self.0.insert(language, text.into());
        self
    }

    pub fn get(&self, language: LanguageCode) -> Option<&str> {
        self.0.get(&language).map(String::as_str)
    }

    pub fn contains(&self, language: LanguageCode) -> bool {
        self.0.contains_key(&language)
    }
}

/// A single recipe as supplied by the recipe data service.
///
/// Read-only to this crate. Field names on the wire follow the catalog
/// format (`recipeId`, `categoryId`, `ingredientId`, `isVeg`, `photo_url`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_id: RecipeId,
    pub category_id: CategoryId,
    /// Keys both the ingredient list and the direction list.
    pub ingredient_id: IngredientSetId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Display string, e.g. `"10m"`.
    pub preptime: String,
    /// Display string, e.g. `"15m"`.
    pub cooktime: String,
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default, rename = "photo_url")]
    pub photo_url: String,
}

impl Recipe {
    pub fn title(&self, language: LanguageCode) -> Option<&str> {
        self.title.get(language)
    }

    pub fn description(&self, language: LanguageCode) -> Option<&str> {
        self.description.get(language)
    }

    /// Check that every language-keyed field covers every supported language.
    pub fn validate(&self) -> Result<(), DomainError> {
        for language in LanguageCode::ALL {
            for (field, text) in [("title", &self.title), ("description", &self.description)] {
                if !text.contains(language) {
                    return Err(DomainError::MissingTranslation {
                        recipe_id: self.recipe_id.clone(),
                        field,
                        language,
                    });
                }
            }
        }
        Ok(())
    }
}
