//! Localized narration composer.
//!
//! Builds the single script read aloud for a recipe. Clause order is fixed:
//!
//! ```text
//!   title → category → prep time → cook time → ingredients → directions → description
//! ```
//!
//! Each clause is `"<connective> <value>."`. A clause whose value is missing
//! (lookup miss, empty list, blank text) is dropped; the others keep their
//! order. Composition is pure: identical inputs give identical output.

use std::collections::BTreeMap;

use crate::domain::{DirectionList, IngredientList, LanguageCode, Recipe};

/// Connective phrases for one language, one per clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrationPhrases {
    pub title: &'static str,
    pub category: &'static str,
    pub prep_time: &'static str,
    pub cook_time: &'static str,
    pub ingredients: &'static str,
    pub directions: &'static str,
    pub description: &'static str,
}

/// English phrases; also the fallback for languages without a template.
pub const ENGLISH_PHRASES: NarrationPhrases = NarrationPhrases {
    title: "The title of the recipe is",
    category: "The category is",
    prep_time: "The prep time is",
    cook_time: "The cook time is",
    ingredients: "The ingredients are",
    directions: "The directions are",
    description: "The description is",
};

pub const FRENCH_PHRASES: NarrationPhrases = NarrationPhrases {
    title: "Le titre de la recette est",
    category: "La catégorie est",
    prep_time: "Le temps de préparation est",
    cook_time: "Le temps de cuisson est",
    ingredients: "Les ingrédients sont",
    directions: "Les directions sont",
    description: "La description est",
};

const STANDARD_PHRASES: [(LanguageCode, NarrationPhrases); 2] = [
    (LanguageCode::En, ENGLISH_PHRASES),
    (LanguageCode::Fr, FRENCH_PHRASES),
];

/// Map from language to its phrase template.
///
/// New languages are new entries, not new branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseBook {
    templates: BTreeMap<LanguageCode, NarrationPhrases>,
}

impl PhraseBook {
    /// The built-in English and French templates.
    pub fn standard() -> Self {
        Self {
            templates: STANDARD_PHRASES.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Add or replace the template for a language.
    pub fn insert(&mut self, language: LanguageCode, phrases: NarrationPhrases) {
        self.templates.insert(language, phrases);
    }

    pub fn get(&self, language: LanguageCode) -> Option<&NarrationPhrases> {
        self.templates.get(&language)
    }

    /// Template for `language`, else the primary language's, else English.
    pub fn resolve(&self, language: LanguageCode) -> &NarrationPhrases {
        self.get(language)
            .or_else(|| self.get(LanguageCode::En))
            .unwrap_or(&ENGLISH_PHRASES)
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolved values for each clause. `None` drops the clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NarrationInput<'a> {
    pub title: Option<&'a str>,
    pub category: Option<&'a str>,
    pub prep_time: Option<&'a str>,
    pub cook_time: Option<&'a str>,
    pub ingredients: Option<&'a IngredientList>,
    pub directions: Option<&'a DirectionList>,
    pub description: Option<&'a str>,
}

impl<'a> NarrationInput<'a> {
    /// Gather clause values from a recipe and the already-resolved lookups.
    pub fn for_recipe(
        recipe: &'a Recipe,
        language: LanguageCode,
        category: Option<&'a str>,
        ingredients: Option<&'a IngredientList>,
        directions: Option<&'a DirectionList>,
    ) -> Self {
        Self {
            title: recipe.title(language),
            category,
            prep_time: Some(recipe.preptime.as_str()),
            cook_time: Some(recipe.cooktime.as_str()),
            ingredients,
            directions,
            description: recipe.description(language),
        }
    }
}

/// Composes narration scripts from a [`PhraseBook`].
#[derive(Debug, Clone, Default)]
pub struct NarrationComposer {
    phrases: PhraseBook,
}

impl NarrationComposer {
    pub const fn new(phrases: PhraseBook) -> Self {
        Self { phrases }
    }

    pub const fn phrases(&self) -> &PhraseBook {
        &self.phrases
    }

    pub fn compose(&self, language: LanguageCode, input: &NarrationInput<'_>) -> String {
        compose_with(self.phrases.resolve(language), input)
    }
}

/// Compose a script with an explicit template.
pub fn compose_with(phrases: &NarrationPhrases, input: &NarrationInput<'_>) -> String {
    let ingredients = input
        .ingredients
        .filter(|list| !list.is_empty())
        .map(ToString::to_string);
    let directions = input
        .directions
        .filter(|list| !list.is_empty())
        .map(ToString::to_string);

    let clauses = [
        (phrases.title, input.title),
        (phrases.category, input.category),
        (phrases.prep_time, input.prep_time),
        (phrases.cook_time, input.cook_time),
        (phrases.ingredients, ingredients.as_deref()),
        (phrases.directions, directions.as_deref()),
        (phrases.description, input.description),
    ];

    clauses
        .into_iter()
        .filter_map(|(connective, value)| {
            let value = value.map(str::trim).filter(|v| !v.is_empty())?;
            Some(sentence(connective, value))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentence(connective: &str, value: &str) -> String {
    if value.ends_with(['.', '!', '?']) {
        format!("{connective} {value}")
    } else {
        format!("{connective} {value}.")
    }
}
