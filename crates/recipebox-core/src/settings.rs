//! Settings domain types and validation.
//!
//! These are pure domain types with no infrastructure dependencies. Loading
//! them from files or the environment is the adapters' job.

use serde::{Deserialize, Serialize};

use crate::domain::{LanguageCode, MeasurementSystem};
use crate::ports::DEFAULT_SPEECH_RATE;

/// Default time a long-press hint stays on screen.
pub const DEFAULT_HINT_DURATION_MS: u64 = 3000;

const HINT_DURATION_RANGE_MS: std::ops::RangeInclusive<u64> = 500..=10_000;
const SPEECH_RATE_RANGE: std::ops::RangeInclusive<f32> = 0.5..=2.0;

/// Application settings structure.
///
/// All fields are optional to support partial config files and graceful
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Language for labels, lookups and narration.
    pub language: Option<LanguageCode>,

    /// Unit system for ingredient quantities.
    pub measurement: Option<MeasurementSystem>,

    /// How long a long-press hint stays visible, in milliseconds (500-10000).
    pub hint_duration_ms: Option<u64>,

    /// Narration rate multiplier (0.5-2.0).
    pub speech_rate: Option<f32>,

    /// Engine-specific voice name for narration.
    pub speech_voice: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            language: Some(LanguageCode::En),
            measurement: Some(MeasurementSystem::Metric),
            hint_duration_ms: Some(DEFAULT_HINT_DURATION_MS),
            speech_rate: Some(DEFAULT_SPEECH_RATE),
            speech_voice: None,
        }
    }

    #[must_use]
    pub fn effective_language(&self) -> LanguageCode {
        self.language.unwrap_or_default()
    }

    #[must_use]
    pub fn effective_measurement(&self) -> MeasurementSystem {
        self.measurement.unwrap_or_default()
    }

    #[must_use]
    pub fn effective_hint_duration_ms(&self) -> u64 {
        self.hint_duration_ms.unwrap_or(DEFAULT_HINT_DURATION_MS)
    }

    #[must_use]
    pub fn effective_speech_rate(&self) -> f32 {
        self.speech_rate.unwrap_or(DEFAULT_SPEECH_RATE)
    }

    /// Merge a partial update into this one, only touching fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(language) = other.language {
            self.language = language;
        }
        if let Some(measurement) = other.measurement {
            self.measurement = measurement;
        }
        if let Some(duration) = other.hint_duration_ms {
            self.hint_duration_ms = duration;
        }
        if let Some(rate) = other.speech_rate {
            self.speech_rate = rate;
        }
        if let Some(ref voice) = other.speech_voice {
            self.speech_voice.clone_from(voice);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = reset the field (fall back to the default)
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub language: Option<Option<LanguageCode>>,
    pub measurement: Option<Option<MeasurementSystem>>,
    pub hint_duration_ms: Option<Option<u64>>,
    pub speech_rate: Option<Option<f32>>,
    pub speech_voice: Option<Option<String>>,
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("Hint duration must be between 500 and 10000 ms, got {0}")]
    InvalidHintDuration(u64),

    #[error("Speech rate must be between 0.5 and 2.0, got {0}")]
    InvalidSpeechRate(f32),

    #[error("Speech voice must not be blank")]
    BlankVoice,
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(duration) = settings.hint_duration_ms {
        if !HINT_DURATION_RANGE_MS.contains(&duration) {
            return Err(SettingsError::InvalidHintDuration(duration));
        }
    }

    if let Some(rate) = settings.speech_rate {
        if !SPEECH_RATE_RANGE.contains(&rate) {
            return Err(SettingsError::InvalidSpeechRate(rate));
        }
    }

    if let Some(ref voice) = settings.speech_voice {
        if voice.trim().is_empty() {
            return Err(SettingsError::BlankVoice);
        }
    }

    Ok(())
}
