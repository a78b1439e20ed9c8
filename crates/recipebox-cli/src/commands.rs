//! Subcommands and their argument types.

use clap::{Subcommand, ValueEnum};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the recipes in the catalog
    List,

    /// Render the details screen of one recipe
    Show {
        /// Recipe id (see `recipebox list`)
        recipe_id: String,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the narration script of a recipe
    Narrate {
        /// Recipe id
        recipe_id: String,
        /// Also speak the script and wait until playback ends
        #[arg(long)]
        speak: bool,
        /// Speech engine used with --speak
        #[arg(long, value_enum, default_value_t = EngineKind::Command)]
        engine: EngineKind,
    },

    /// Replay screen events against one recipe, printing the view after each
    Session {
        /// Recipe id
        recipe_id: String,
        /// Events to apply in order
        #[arg(value_enum, required = true)]
        events: Vec<SessionEvent>,
        /// Screen the details were opened from
        #[arg(long, default_value = "Recipes")]
        from: String,
        /// Speech engine used by `speak`
        #[arg(long, value_enum, default_value_t = EngineKind::Log)]
        engine: EngineKind,
        /// Print each view as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Speech engine selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Write the script to the log only
    Log,
    /// Run an external TTS program (espeak-ng or $RECIPEBOX_TTS_BIN)
    Command,
}

/// One simulated user or host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SessionEvent {
    /// Press the speak button
    Speak,
    /// Stop narration
    Stop,
    /// Press the app-bar back arrow
    Back,
    /// Press the platform back button
    HardwareBack,
    /// Deliver a blur event to the screen
    Blur,
    /// Deliver a focus event to the screen
    Focus,
    /// Press the favorite icon
    Favorite,
    /// Long-press the preparation time icon
    HintPrep,
    /// Long-press the cooking time icon
    HintCook,
    /// Dismiss the visible hint
    Dismiss,
    /// Tear the screen down
    Unmount,
}
