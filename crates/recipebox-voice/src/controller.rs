//! Narration lifecycle controller.
//!
//! A two-state machine guarding one speech engine:
//!
//! ```text
//!   Idle ──speak──▶ Speaking ──(speak | stop | back | hardware back | blur | unmount)──▶ Idle
//! ```
//!
//! The engine session is an RAII value that exists exactly while the
//! controller is `Speaking`. Leaving `Speaking` drops the session, and the
//! session's `Drop` issues the engine `stop`. Every exit path therefore stops
//! exactly once, and a trigger received while `Idle` has nothing to drop.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use recipebox_core::{LanguageCode, SpeechEngine, Utterance};

use crate::error::NarrationError;

// ── States and triggers ────────────────────────────────────────────

/// Whether a narration is audible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrationState {
    #[default]
    Idle,
    Speaking,
}

/// Why a narration was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopTrigger {
    /// Speak pressed again while speaking.
    UserToggle,
    /// Explicit stop request.
    UserStop,
    /// The screen's own back action.
    BackNavigation,
    /// Platform back button.
    HardwareBack,
    /// The screen lost focus.
    Blur,
    /// The screen (or the controller) is being torn down.
    Unmount,
}

// ── Events ─────────────────────────────────────────────────────────

/// Events emitted by the controller to the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum NarrationEvent {
    StateChanged(NarrationState),

    /// An utterance was handed to the engine.
    Started {
        language: LanguageCode,
        characters: usize,
    },

    /// The engine was told to stop.
    Stopped { trigger: StopTrigger },

    /// The engine refused to start.
    Error(String),
}

// ── Engine session ─────────────────────────────────────────────────

/// Live engine session; stops the engine when dropped.
struct SpeechSession {
    engine: Arc<dyn SpeechEngine>,
}

impl Drop for SpeechSession {
    fn drop(&mut self) {
        self.engine.stop();
    }
}

// ── Controller ─────────────────────────────────────────────────────

/// Starts and stops narration on a [`SpeechEngine`].
pub struct NarrationController {
    engine: Arc<dyn SpeechEngine>,
    session: Option<SpeechSession>,
    event_tx: mpsc::UnboundedSender<NarrationEvent>,
}

impl NarrationController {
    /// Create an idle controller.
    ///
    /// Returns the controller and a receiver for [`NarrationEvent`]s.
    #[must_use]
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
    ) -> (Self, mpsc::UnboundedReceiver<NarrationEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let controller = Self {
            engine,
            session: None,
            event_tx,
        };
        (controller, event_rx)
    }

    pub const fn state(&self) -> NarrationState {
        if self.session.is_some() {
            NarrationState::Speaking
        } else {
            NarrationState::Idle
        }
    }

    pub const fn is_speaking(&self) -> bool {
        self.session.is_some()
    }

    /// Handle a press of the speak button.
    ///
    /// Stops when speaking. Otherwise builds the utterance with `compose`
    /// (only then, so an idle press never pays for composition) and starts.
    pub fn toggle<F>(&mut self, compose: F) -> Result<NarrationState, NarrationError>
    where
        F: FnOnce() -> Utterance,
    {
        if self.is_speaking() {
            self.stop(StopTrigger::UserToggle);
            return Ok(NarrationState::Idle);
        }
        self.start(compose())
    }

    /// Submit `utterance` and enter `Speaking`.
    ///
    /// Already speaking: no engine call. Engine refusal: stays `Idle`,
    /// emits [`NarrationEvent::Error`] and returns the error.
    pub fn start(&mut self, utterance: Utterance) -> Result<NarrationState, NarrationError> {
        if self.is_speaking() {
            tracing::debug!("Narration already speaking, ignoring start");
            return Ok(NarrationState::Speaking);
        }
        if utterance.text.trim().is_empty() {
            return Err(NarrationError::EmptyScript);
        }

        if let Err(e) = self.engine.speak(&utterance) {
            tracing::warn!(error = %e, "Speech engine refused narration");
            self.emit(NarrationEvent::Error(e.to_string()));
            return Err(e.into());
        }

        self.session = Some(SpeechSession {
            engine: Arc::clone(&self.engine),
        });
        tracing::debug!(
            old = ?NarrationState::Idle,
            new = ?NarrationState::Speaking,
            language = %utterance.language,
            "Narration state transition"
        );
        self.emit(NarrationEvent::StateChanged(NarrationState::Speaking));
        self.emit(NarrationEvent::Started {
            language: utterance.language,
            characters: utterance.text.chars().count(),
        });
        Ok(NarrationState::Speaking)
    }

    /// Leave `Speaking`, stopping the engine once.
    ///
    /// Returns whether a transition happened. While `Idle` this is a no-op.
    pub fn stop(&mut self, trigger: StopTrigger) -> bool {
        let Some(session) = self.session.take() else {
            tracing::trace!(?trigger, "Narration already idle");
            return false;
        };
        drop(session);

        tracing::debug!(
            old = ?NarrationState::Speaking,
            new = ?NarrationState::Idle,
            ?trigger,
            "Narration state transition"
        );
        self.emit(NarrationEvent::Stopped { trigger });
        self.emit(NarrationEvent::StateChanged(NarrationState::Idle));
        true
    }

    /// Emit an event. A dropped receiver is only logged.
    fn emit(&self, event: NarrationEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::trace!("Narration event receiver dropped");
        }
    }
}

impl fmt::Debug for NarrationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrationController")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl Drop for NarrationController {
    fn drop(&mut self) {
        self.stop(StopTrigger::Unmount);
    }
}
