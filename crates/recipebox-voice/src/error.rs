//! Narration error types.

use recipebox_core::SpeechError;

/// Errors returned by the narration controller.
#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    /// The speech engine refused the utterance; narration stayed idle.
    #[error("Narration could not start: {0}")]
    StartFailed(#[from] SpeechError),

    /// There was nothing to say (every clause was missing).
    #[error("Narration script is empty")]
    EmptyScript,
}
