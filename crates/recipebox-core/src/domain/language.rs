//! Language and measurement selectors.
//!
//! Both are small closed sets. Their wire form is the lowercase name used
//! by settings files, environment variables and the recipe catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Language used for screen labels, lookups and narration phrasing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// English (primary language).
    #[default]
    En,
    /// French (secondary language).
    Fr,
}

impl LanguageCode {
    /// Every supported language, primary first.
    pub const ALL: [Self; 2] = [Self::En, Self::Fr];

    /// The lowercase ISO 639-1 code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownLanguage(s.to_string()))
    }
}

/// Unit system the ingredient lookup should answer in.
///
/// Quantities are never converted here; this only selects a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    #[default]
    Metric,
    Imperial,
}

impl MeasurementSystem {
    pub const ALL: [Self; 2] = [Self::Metric, Self::Imperial];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|system| system.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownMeasurement(s.to_string()))
    }
}
