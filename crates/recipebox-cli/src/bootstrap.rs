//! CLI bootstrap - the composition root.
//!
//! The only place where concrete adapters are chosen and wired together:
//! - Recipe catalog and favorites store (via recipebox-data)
//! - Speech engines (via recipebox-voice)
//! - Navigation host and screen dependencies (via recipebox-screen)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use recipebox_core::{
    LanguageCode, MeasurementSystem, NavigationHost, Recipe, RecipeId, ScreenId, Settings, SettingsUpdate,
    SpeechEngine, validate_settings,
};
use recipebox_data::{InMemoryFavoritesStore, InMemoryRecipeCatalog};
use recipebox_screen::{
    RECIPE_DETAILS_SCREEN, RecipeDetailsParams, RecipeDetailsScreen, ScreenDeps, StackNavigator,
};
use recipebox_voice::{CommandEngineConfig, CommandSpeechEngine, LogSpeechEngine};

use crate::commands::EngineKind;
use crate::error::CliError;
use crate::parser::Cli;

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Catalog file; `None` uses the bundled sample catalog.
    pub catalog_path: Option<PathBuf>,
    /// Optional JSON settings file.
    pub settings_path: Option<PathBuf>,
    /// Language from `--language` or the environment.
    pub language: Option<LanguageCode>,
    /// Unit system from `--measurement` or the environment.
    pub measurement: Option<MeasurementSystem>,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            catalog_path: cli.catalog.clone(),
            settings_path: cli.config.clone(),
            language: cli.language,
            measurement: cli.measurement,
        }
    }
}

/// Layer defaults, the settings file and the command line, then validate.
pub fn load_settings(config: &CliConfig) -> Result<Settings, CliError> {
    let mut settings = Settings::with_defaults();

    if let Some(path) = &config.settings_path {
        let file = read_settings_file(path)?;
        settings.merge(&SettingsUpdate {
            language: file.language.map(Some),
            measurement: file.measurement.map(Some),
            hint_duration_ms: file.hint_duration_ms.map(Some),
            speech_rate: file.speech_rate.map(Some),
            speech_voice: file.speech_voice.map(Some),
        });
    }

    settings.merge(&SettingsUpdate {
        language: config.language.map(Some),
        measurement: config.measurement.map(Some),
        ..SettingsUpdate::default()
    });

    validate_settings(&settings)?;
    tracing::debug!(?settings, "Effective settings");
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<Settings, CliError> {
    tracing::debug!(path = %path.display(), "Reading settings file");
    let json = std::fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&json).map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub catalog: Arc<InMemoryRecipeCatalog>,
    pub favorites: Arc<InMemoryFavoritesStore>,
    pub settings: Settings,
}

impl CliContext {
    pub fn recipe(&self, id: &str) -> Result<&Recipe, CliError> {
        Ok(self.catalog.recipe(&RecipeId::new(id))?)
    }

    /// Open the details screen of `recipe_id` as if navigated from `source`.
    ///
    /// Returns the navigator so callers can deliver host events.
    pub fn open_screen(
        &self,
        recipe_id: &str,
        source: &str,
        speech: Arc<dyn SpeechEngine>,
    ) -> Result<(RecipeDetailsScreen, Arc<StackNavigator>), CliError> {
        let recipe = self.recipe(recipe_id)?.clone();
        let source_screen = ScreenId::new(source);

        let navigator = Arc::new(StackNavigator::new(source_screen.clone()));
        navigator.navigate(&ScreenId::new(RECIPE_DETAILS_SCREEN));

        let deps = ScreenDeps::new(
            self.catalog.clone(),
            self.favorites.clone(),
            speech,
            navigator.clone(),
        );
        let params = RecipeDetailsParams {
            recipe,
            source_screen,
        };
        let screen = RecipeDetailsScreen::mount(params, deps, &self.settings);
        Ok((screen, navigator))
    }
}

/// Load settings and the catalog.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let settings = load_settings(config)?;

    let catalog = match &config.catalog_path {
        Some(path) => InMemoryRecipeCatalog::from_path(path)?,
        None => InMemoryRecipeCatalog::from_json_str(SAMPLE_CATALOG)?,
    };

    Ok(CliContext {
        catalog: Arc::new(catalog),
        favorites: Arc::new(InMemoryFavoritesStore::new()),
        settings,
    })
}

/// A speech engine, keeping the concrete command engine for playback polling.
pub enum Engine {
    Log(Arc<LogSpeechEngine>),
    Command(Arc<CommandSpeechEngine>),
}

impl Engine {
    pub fn new(kind: EngineKind) -> Self {
        match kind {
            EngineKind::Log => Self::Log(Arc::new(LogSpeechEngine::new())),
            EngineKind::Command => Self::Command(Arc::new(CommandSpeechEngine::new(
                CommandEngineConfig::default(),
            ))),
        }
    }

    pub fn port(&self) -> Arc<dyn SpeechEngine> {
        match self {
            Self::Log(engine) => engine.clone(),
            Self::Command(engine) => engine.clone(),
        }
    }

    /// Whether audio is still playing. The log engine never plays.
    pub fn is_playing(&self) -> bool {
        match self {
            Self::Log(_) => false,
            Self::Command(engine) => engine.is_playing(),
        }
    }
}
