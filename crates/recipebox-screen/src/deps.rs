//! Dependency injection for [`RecipeDetailsScreen`](crate::RecipeDetailsScreen).
//!
//! All collaborators are injected as trait objects so the screen never
//! depends on a concrete store, engine or navigator.

use std::sync::Arc;

use recipebox_core::{FavoritesStore, NavigationHost, RecipeLookup, SpeechEngine};

/// Ports required to mount a recipe details screen.
///
/// Fields are private to enforce construction via `ScreenDeps::new()`.
#[derive(Clone)]
pub struct ScreenDeps {
    /// Localized category, ingredient and direction lookups.
    pub(crate) lookup: Arc<dyn RecipeLookup>,
    /// Shared favorites collection.
    pub(crate) favorites: Arc<dyn FavoritesStore>,
    /// Text-to-speech engine used for narration.
    pub(crate) speech: Arc<dyn SpeechEngine>,
    /// Host delivering focus, blur and hardware-back events.
    pub(crate) navigation: Arc<dyn NavigationHost>,
}

impl ScreenDeps {
    pub fn new(
        lookup: Arc<dyn RecipeLookup>,
        favorites: Arc<dyn FavoritesStore>,
        speech: Arc<dyn SpeechEngine>,
        navigation: Arc<dyn NavigationHost>,
    ) -> Self {
        Self {
            lookup,
            favorites,
            speech,
            navigation,
        }
    }
}
