//! Speech engine port: one-way commands to an external text-to-speech engine.
//!
//! # Design Rules
//!
//! - `speak` is fire-and-forget: it returns once the utterance is submitted,
//!   never when playback finishes. No completion future is exposed.
//! - `speak` may only fail synchronously (engine missing, submission refused).
//!   Playback failures after submission are not observable through this port.
//! - `stop` is infallible and idempotent; calling it while nothing plays is a
//!   no-op.

use thiserror::Error;

use crate::domain::LanguageCode;

/// Default speaking rate multiplier.
pub const DEFAULT_SPEECH_RATE: f32 = 1.0;

/// Text submitted to the speech engine together with how to voice it.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub language: LanguageCode,
    /// Rate multiplier, 1.0 is the engine's normal speed.
    pub rate: f32,
    /// Engine-specific voice name, if one was configured.
    pub voice: Option<String>,
}

impl Utterance {
    pub fn new(text: impl Into<String>, language: LanguageCode) -> Self {
        Self {
            text: text.into(),
            language,
            rate: DEFAULT_SPEECH_RATE,
            voice: None,
        }
    }

    #[must_use]
    pub const fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    #[must_use]
    pub fn with_voice(mut self, voice: Option<String>) -> Self {
        self.voice = voice;
        self
    }
}

/// Synchronous submission failures reported by a speech engine.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// No engine is reachable (binary missing, service down).
    #[error("Speech engine unavailable: {0}")]
    Unavailable(String),

    /// The engine refused or failed to accept the utterance.
    #[error("Failed to submit utterance: {0}")]
    SubmitFailed(String),
}

/// External text-to-speech engine.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait SpeechEngine: Send + Sync {
    /// Submit an utterance for asynchronous playback.
    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Stop any playback. Safe to call at any time.
    fn stop(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterance_defaults() {
        let utterance = Utterance::new("Bonjour", LanguageCode::Fr);
        assert_eq!(utterance.rate, DEFAULT_SPEECH_RATE);
        assert_eq!(utterance.voice, None);
        assert_eq!(utterance.language, LanguageCode::Fr);
    }

    #[test]
    fn test_mock_engine_counts_calls() {
        let mut engine = MockSpeechEngine::new();
        engine
            .expect_speak()
            .withf(|u: &Utterance| u.text == "hello" && u.rate == 1.5)
            .times(1)
            .returning(|_| Ok(()));
        engine.expect_stop().times(2).return_const(());

        let utterance = Utterance::new("hello", LanguageCode::En).with_rate(1.5);
        engine.speak(&utterance).unwrap();
        engine.stop();
        engine.stop();
    }
}
