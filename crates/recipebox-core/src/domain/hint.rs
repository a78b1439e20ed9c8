//! Long-press info hints for the prep and cook time icons.

use serde::{Deserialize, Serialize};

/// Which time icon a hint explains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoHint {
    PrepTime,
    CookTime,
}

/// "Currently shown hint, or none", plus the last requested hint.
///
/// Showing one hint supersedes the other. Dismissal hides the hint but
/// remembers which one was last requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoHintState {
    last_requested: Option<InfoHint>,
    visible: bool,
}

impl InfoHintState {
    pub const fn new() -> Self {
        Self {
            last_requested: None,
            visible: false,
        }
    }

    pub fn show(&mut self, hint: InfoHint) {
        self.last_requested = Some(hint);
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// The hint on screen right now.
    pub fn current(&self) -> Option<InfoHint> {
        self.last_requested.filter(|_| self.visible)
    }

    pub const fn last_requested(&self) -> Option<InfoHint> {
        self.last_requested
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}
