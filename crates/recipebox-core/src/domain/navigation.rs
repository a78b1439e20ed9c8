//! Navigation identifiers and lifecycle event kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a navigation destination (e.g. `"Recipes"`, `"Favorites"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(String);

impl ScreenId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Lifecycle events a screen can subscribe to on the navigation host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenEventKind {
    /// The screen became the focused destination.
    Focus,
    /// The screen lost focus (tab switch, another screen pushed).
    Blur,
    /// The platform back button was pressed.
    HardwareBack,
}

/// What a listener wants the host to do after it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The listener handled the event; the host must skip its default action.
    Handled,
    /// Let the host run its default action.
    Default,
}

/// Handle returned by the host when a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);
