//! Speech engine adapters.
//!
//! - [`LogSpeechEngine`]: writes the script to the log, used when no TTS
//!   binary is installed and in headless runs.
//! - [`CommandSpeechEngine`]: runs an external TTS program (default
//!   `espeak-ng`) per utterance and kills it on `stop`.

use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::{Mutex, MutexGuard, PoisonError};

use recipebox_core::{SpeechEngine, SpeechError, Utterance};

/// Speaking rate of espeak-ng at multiplier 1.0, in words per minute.
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// Environment variable overriding the TTS program.
pub const TTS_BIN_ENV: &str = "RECIPEBOX_TTS_BIN";

// ── Log engine ─────────────────────────────────────────────────────

/// Engine that only logs what it would say.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSpeechEngine;

impl LogSpeechEngine {
    pub const fn new() -> Self {
        Self
    }
}

impl SpeechEngine for LogSpeechEngine {
    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        tracing::info!(
            language = %utterance.language,
            rate = utterance.rate,
            text = %utterance.text,
            "Narration (log engine)"
        );
        Ok(())
    }

    fn stop(&self) {
        tracing::info!("Narration stopped (log engine)");
    }
}

// ── Command engine ─────────────────────────────────────────────────

/// External TTS program settings.
#[derive(Debug, Clone)]
pub struct CommandEngineConfig {
    /// Program to run; receives the text as its last argument.
    pub program: PathBuf,
    /// Extra arguments placed before the generated ones.
    pub extra_args: Vec<String>,
}

impl Default for CommandEngineConfig {
    fn default() -> Self {
        let program = std::env::var(TTS_BIN_ENV)
            .map_or_else(|_| PathBuf::from("espeak-ng"), PathBuf::from);
        Self {
            program,
            extra_args: Vec::new(),
        }
    }
}

/// Engine that spawns one TTS process per utterance.
///
/// Only one process is alive at a time: `speak` replaces the current one and
/// `stop` kills it. Both are non-blocking apart from reaping a killed child.
#[derive(Debug)]
pub struct CommandSpeechEngine {
    config: CommandEngineConfig,
    child: Mutex<Option<Child>>,
}

impl CommandSpeechEngine {
    pub fn new(config: CommandEngineConfig) -> Self {
        Self {
            config,
            child: Mutex::new(None),
        }
    }

    /// Arguments for one utterance, excluding the program itself.
    pub fn build_args(&self, utterance: &Utterance) -> Vec<String> {
        let voice = utterance
            .voice
            .clone()
            .unwrap_or_else(|| utterance.language.as_str().to_string());
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let words_per_minute = (BASE_WORDS_PER_MINUTE * utterance.rate).round().max(1.0) as u32;

        let mut args = self.config.extra_args.clone();
        args.extend([
            "-v".to_string(),
            voice,
            "-s".to_string(),
            words_per_minute.to_string(),
            utterance.text.clone(),
        ]);
        args
    }

    /// Whether a TTS process is still running.
    pub fn is_playing(&self) -> bool {
        let mut child = self.lock();
        match child.as_mut().map(Child::try_wait) {
            Some(Ok(None)) => true,
            Some(Ok(Some(_)) | Err(_)) => {
                *child = None;
                false
            }
            None => false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Child>> {
        self.child.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn terminate(child: &mut Child) {
        match child.try_wait() {
            Ok(Some(status)) => {
                tracing::debug!(%status, "TTS process had already exited");
            }
            Ok(None) => {
                if let Err(e) = child.kill() {
                    tracing::warn!(error = %e, "Failed to kill TTS process");
                }
                match child.wait() {
                    Ok(status) => tracing::debug!(%status, "TTS process killed"),
                    Err(e) => tracing::warn!(error = %e, "Failed to reap TTS process"),
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to poll TTS process"),
        }
    }
}

impl SpeechEngine for CommandSpeechEngine {
    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        let args = self.build_args(utterance);
        let mut slot = self.lock();
        if let Some(mut previous) = slot.take() {
            Self::terminate(&mut previous);
        }

        let child = Command::new(&self.config.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => SpeechError::Unavailable(format!(
                    "{} not found",
                    self.config.program.display()
                )),
                _ => SpeechError::SubmitFailed(e.to_string()),
            })?;

        tracing::debug!(
            program = %self.config.program.display(),
            pid = child.id(),
            "TTS process started"
        );
        *slot = Some(child);
        Ok(())
    }

    fn stop(&self) {
        if let Some(mut child) = self.lock().take() {
            Self::terminate(&mut child);
        }
    }
}

impl Drop for CommandSpeechEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_core::LanguageCode;

    fn engine_with(program: &str) -> CommandSpeechEngine {
        CommandSpeechEngine::new(CommandEngineConfig {
            program: PathBuf::from(program),
            extra_args: Vec::new(),
        })
    }

    #[test]
    fn test_args_use_language_as_default_voice() {
        let engine = engine_with("espeak-ng");
        let args = engine.build_args(&Utterance::new("Bonjour", LanguageCode::Fr));
        assert_eq!(args, vec!["-v", "fr", "-s", "175", "Bonjour"]);
    }

    #[test]
    fn test_args_honour_voice_and_rate() {
        let engine = CommandSpeechEngine::new(CommandEngineConfig {
            program: PathBuf::from("espeak-ng"),
            extra_args: vec!["-a".to_string(), "120".to_string()],
        });
        let utterance = Utterance::new("Hello", LanguageCode::En)
            .with_rate(2.0)
            .with_voice(Some("en-us".to_string()));
        assert_eq!(
            engine.build_args(&utterance),
            vec!["-a", "120", "-v", "en-us", "-s", "350", "Hello"]
        );
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let engine = engine_with("/nonexistent/recipebox-tts-binary");
        let err = engine
            .speak(&Utterance::new("Hello", LanguageCode::En))
            .unwrap_err();
        assert!(matches!(err, SpeechError::Unavailable(_)));
        assert!(!engine.is_playing());
    }

    #[test]
    fn test_stop_without_playback_is_noop() {
        let engine = engine_with("espeak-ng");
        engine.stop();
        engine.stop();
        assert!(!engine.is_playing());
    }

    #[cfg(unix)]
    #[test]
    fn test_stop_kills_and_reaps_running_process() {
        let engine = CommandSpeechEngine::new(CommandEngineConfig {
            program: PathBuf::from("sh"),
            extra_args: vec!["-c".to_string(), "sleep 30".to_string(), "tts".to_string()],
        });
        engine
            .speak(&Utterance::new("Hello", LanguageCode::En))
            .unwrap();
        assert!(engine.is_playing());

        engine.stop();
        assert!(!engine.is_playing());
        assert!(engine.lock().is_none());
    }

    #[test]
    fn test_log_engine_accepts_everything() {
        let engine = LogSpeechEngine::new();
        assert!(engine.speak(&Utterance::new("Hi", LanguageCode::En)).is_ok());
        engine.stop();
    }
}
