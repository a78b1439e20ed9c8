//! Static screen labels per language.

use serde::Serialize;

use crate::domain::{InfoHint, LanguageCode};

/// Labels shown on the recipe details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenLabels {
    pub prep_time: &'static str,
    pub cook_time: &'static str,
    pub ingredients: &'static str,
    pub directions: &'static str,
    pub description: &'static str,
    pub add_to_favorites: &'static str,
    /// Prefix of the long-press hint for the prep time icon.
    pub prep_time_hint: &'static str,
    /// Prefix of the long-press hint for the cook time icon.
    pub cook_time_hint: &'static str,
    pub dismiss: &'static str,
}

const ENGLISH_LABELS: ScreenLabels = ScreenLabels {
    prep_time: "Prep Time",
    cook_time: "Cook Time",
    ingredients: "Ingredients",
    directions: "Directions",
    description: "Description",
    add_to_favorites: "Add to favorite",
    prep_time_hint: "Preparation Time",
    cook_time_hint: "Cooking Time",
    dismiss: "Dismiss",
};

const FRENCH_LABELS: ScreenLabels = ScreenLabels {
    prep_time: "Temps de préparation",
    cook_time: "Temps de cuisson",
    ingredients: "Ingrédients",
    directions: "Directions",
    description: "Description",
    add_to_favorites: "Ajouter aux Favoris",
    prep_time_hint: "Temps de préparation",
    cook_time_hint: "Temps de cuisson",
    dismiss: "Fermer",
};

static LABEL_TABLE: [(LanguageCode, ScreenLabels); 2] = [
    (LanguageCode::En, ENGLISH_LABELS),
    (LanguageCode::Fr, FRENCH_LABELS),
];

impl ScreenLabels {
    /// Labels for `language`, falling back to the primary language.
    pub fn for_language(language: LanguageCode) -> &'static Self {
        LABEL_TABLE
            .iter()
            .find(|(code, _)| *code == language)
            .map_or(&LABEL_TABLE[0].1, |(_, labels)| labels)
    }

    /// Hint line such as `"Preparation Time: 10m"`.
    pub fn hint_text(&self, hint: InfoHint, value: &str) -> String {
        let prefix = match hint {
            InfoHint::PrepTime => self.prep_time_hint,
            InfoHint::CookTime => self.cook_time_hint,
        };
        format!("{prefix}: {value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_language() {
        assert_eq!(
            ScreenLabels::for_language(LanguageCode::En).add_to_favorites,
            "Add to favorite"
        );
        assert_eq!(
            ScreenLabels::for_language(LanguageCode::Fr).ingredients,
            "Ingrédients"
        );
    }

    #[test]
    fn test_hint_text() {
        let labels = ScreenLabels::for_language(LanguageCode::En);
        assert_eq!(labels.hint_text(InfoHint::PrepTime, "10m"), "Preparation Time: 10m");
        assert_eq!(labels.hint_text(InfoHint::CookTime, "15m"), "Cooking Time: 15m");
    }
}
