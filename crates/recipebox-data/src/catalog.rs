//! JSON-backed recipe catalog implementing [`RecipeLookup`].

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use recipebox_core::{
    CategoryId, DirectionList, IngredientList, IngredientSetId, LanguageCode, LocalizedText,
    LookupError, MeasurementSystem, Recipe, RecipeId, RecipeLookup,
};

// ── Wire shapes ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<CategoryEntry>,
    recipes: Vec<Recipe>,
    #[serde(default)]
    ingredients: Vec<IngredientEntry>,
    #[serde(default)]
    directions: Vec<DirectionEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    id: CategoryId,
    name: LocalizedText,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IngredientEntry {
    ingredient_id: IngredientSetId,
    #[serde(default)]
    metric: BTreeMap<LanguageCode, IngredientList>,
    #[serde(default)]
    imperial: BTreeMap<LanguageCode, IngredientList>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirectionEntry {
    ingredient_id: IngredientSetId,
    #[serde(default)]
    steps: BTreeMap<LanguageCode, DirectionList>,
}

// ── Catalog ────────────────────────────────────────────────────────

/// Read-only recipe catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeCatalog {
    recipes: Vec<Recipe>,
    categories: HashMap<CategoryId, LocalizedText>,
    ingredients: HashMap<(IngredientSetId, LanguageCode, MeasurementSystem), IngredientList>,
    directions: HashMap<(IngredientSetId, LanguageCode), DirectionList>,
}

impl InMemoryRecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, LookupError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| LookupError::Parse(e.to_string()))?;

        let mut catalog = Self::new();
        for recipe in file.recipes {
            catalog.insert_recipe(recipe)?;
        }
        for category in file.categories {
            catalog.categories.insert(category.id, category.name);
        }
        for entry in file.ingredients {
            for (measurement, by_language) in [
                (MeasurementSystem::Metric, entry.metric),
                (MeasurementSystem::Imperial, entry.imperial),
            ] {
                for (language, list) in by_language {
                    catalog
                        .ingredients
                        .insert((entry.ingredient_id, language, measurement), list);
                }
            }
        }
        for entry in file.directions {
            for (language, steps) in entry.steps {
                catalog
                    .directions
                    .insert((entry.ingredient_id, language), steps);
            }
        }

        tracing::info!(
            recipes = catalog.recipes.len(),
            categories = catalog.categories.len(),
            "Recipe catalog loaded"
        );
        Ok(catalog)
    }

    /// Read a catalog file from disk.
    pub fn from_path(path: &Path) -> Result<Self, LookupError> {
        tracing::debug!(path = %path.display(), "Reading recipe catalog");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Add a recipe after validating it. Duplicate ids are rejected.
    pub fn insert_recipe(&mut self, recipe: Recipe) -> Result<(), LookupError> {
        recipe.validate()?;
        if self.recipes.iter().any(|r| r.recipe_id == recipe.recipe_id) {
            return Err(LookupError::DuplicateRecipe(recipe.recipe_id));
        }
        self.recipes.push(recipe);
        Ok(())
    }

    #[must_use]
    pub fn with_category(mut self, id: CategoryId, name: LocalizedText) -> Self {
        self.categories.insert(id, name);
        self
    }

    #[must_use]
    pub fn with_ingredients(
        mut self,
        set_id: IngredientSetId,
        language: LanguageCode,
        measurement: MeasurementSystem,
        list: IngredientList,
    ) -> Self {
        self.ingredients.insert((set_id, language, measurement), list);
        self
    }

    #[must_use]
    pub fn with_directions(
        mut self,
        set_id: IngredientSetId,
        language: LanguageCode,
        steps: DirectionList,
    ) -> Self {
        self.directions.insert((set_id, language), steps);
        self
    }

    /// All recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe(&self, id: &RecipeId) -> Result<&Recipe, LookupError> {
        self.recipes
            .iter()
            .find(|r| &r.recipe_id == id)
            .ok_or_else(|| LookupError::RecipeNotFound(id.clone()))
    }
}

impl RecipeLookup for InMemoryRecipeCatalog {
    fn category_name(&self, category_id: CategoryId, language: LanguageCode) -> Option<String> {
        self.categories
            .get(&category_id)
            .and_then(|name| name.get(language))
            .map(str::to_string)
    }

    fn ingredients(
        &self,
        set_id: IngredientSetId,
        language: LanguageCode,
        measurement: MeasurementSystem,
    ) -> Option<IngredientList> {
        self.ingredients
            .get(&(set_id, language, measurement))
            .cloned()
    }

    fn directions(
        &self,
        set_id: IngredientSetId,
        language: LanguageCode,
    ) -> Option<DirectionList> {
        self.directions.get(&(set_id, language)).cloned()
    }
}
