//! Render model of the recipe details screen.

use serde::Serialize;

use recipebox_core::{InfoHint, LanguageCode, RecipeId, ScreenLabels};
use recipebox_voice::NarrationState;

/// Everything a UI shell needs to draw the screen once.
///
/// Lookup misses are rendered as absent (`None` or an empty list), never as
/// errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailsView {
    pub recipe_id: RecipeId,
    pub language: LanguageCode,
    pub title: Option<String>,
    pub category: Option<String>,
    pub is_veg: bool,
    pub photo_url: String,
    pub prep_time: String,
    pub cook_time: String,
    /// Drives the speak / speak-off icon.
    pub narration: NarrationState,
    pub hint: Option<HintView>,
    pub ingredients: Vec<String>,
    /// Numbered lines, e.g. `"1. Mix"`.
    pub directions: Vec<String>,
    pub description: Option<String>,
    pub is_favorite: bool,
    pub labels: ScreenLabels,
}

/// A visible long-press hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintView {
    pub hint: InfoHint,
    pub text: String,
    /// How long the shell keeps the hint on screen.
    pub duration_ms: u64,
    pub dismiss_label: &'static str,
}
