#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod labels;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    CategoryId, DirectionList, DomainError, EventDisposition, InfoHint, InfoHintState,
    IngredientList, IngredientSetId, LanguageCode, ListenerId, LocalizedText, MeasurementSystem,
    Recipe, RecipeId, ScreenEventKind, ScreenId,
};
pub use labels::ScreenLabels;
pub use ports::{
    DEFAULT_SPEECH_RATE, FavoritesError, FavoritesStore, ListenerGuard, LookupError,
    NavigationHost, RecipeLookup, ScreenListener, SpeechEngine, SpeechError, Utterance,
};
pub use services::{
    FavoriteStatus, FavoritesToggle, NarrationComposer, NarrationInput, NarrationPhrases,
    PhraseBook,
};
pub use settings::{
    DEFAULT_HINT_DURATION_MS, Settings, SettingsError, SettingsUpdate, validate_settings,
};
