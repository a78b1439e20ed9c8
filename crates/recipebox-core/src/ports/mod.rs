//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces the core expects from infrastructure. They
//! contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - Ports are passed in explicitly as `Arc<dyn Port>`; there are no globals
//! - Speech commands are one-way: no futures, no completion callbacks
//! - Lookup misses are `None`, never errors
//! - Mutations of shared state are expressed as intents (`add`, `remove`)

pub mod favorites;
pub mod navigation;
pub mod recipe_lookup;
pub mod speech;

pub use favorites::{FavoritesError, FavoritesStore};
pub use navigation::{ListenerGuard, NavigationHost, ScreenListener};
pub use recipe_lookup::{LookupError, RecipeLookup};
pub use speech::{DEFAULT_SPEECH_RATE, SpeechEngine, SpeechError, Utterance};

#[cfg(any(test, feature = "test-utils"))]
pub use favorites::MockFavoritesStore;
#[cfg(any(test, feature = "test-utils"))]
pub use recipe_lookup::MockRecipeLookup;
#[cfg(any(test, feature = "test-utils"))]
pub use speech::MockSpeechEngine;
