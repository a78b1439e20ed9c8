//! Errors returned by screen operations.

use recipebox_core::FavoritesError;
use recipebox_voice::NarrationError;

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error(transparent)]
    Narration(#[from] NarrationError),

    #[error(transparent)]
    Favorites(#[from] FavoritesError),

    /// The screen was unmounted; user actions are no longer accepted.
    #[error("Recipe details screen is not mounted")]
    Unmounted,

    /// Another screen is current; narration and hints wait for focus.
    #[error("Recipe details screen is not focused")]
    NotFocused,
}
