//! Core services - pure orchestration over ports and domain types.
//!
//! Services here don't know about concrete adapters.

mod favorites;
mod narration;

pub use favorites::{FavoriteStatus, FavoritesToggle};
pub use narration::{
    ENGLISH_PHRASES, FRENCH_PHRASES, NarrationComposer, NarrationInput, NarrationPhrases,
    PhraseBook, compose_with,
};
