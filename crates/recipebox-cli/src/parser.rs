//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use recipebox_core::{LanguageCode, MeasurementSystem};

use crate::commands::Commands;

/// Command-line interface for browsing and narrating recipes.
#[derive(Parser)]
#[command(name = "recipebox")]
#[command(about = "Browse, narrate and favorite recipes from the terminal")]
#[command(version)]
pub struct Cli {
    /// Recipe catalog JSON file (defaults to the bundled sample catalog)
    #[arg(long, global = true, env = "RECIPEBOX_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Settings JSON file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Language for labels and narration (en, fr)
    #[arg(long, global = true, env = "RECIPEBOX_LANGUAGE")]
    pub language: Option<LanguageCode>,

    /// Unit system for ingredient quantities (metric, imperial)
    #[arg(long, global = true, env = "RECIPEBOX_MEASUREMENT")]
    pub measurement: Option<MeasurementSystem>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "recipebox",
            "--verbose",
            "--language",
            "FR",
            "--measurement",
            "imperial",
            "list",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.language, Some(LanguageCode::Fr));
        assert_eq!(cli.measurement, Some(MeasurementSystem::Imperial));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let result = Cli::try_parse_from(["recipebox", "--language", "de", "list"]);
        assert!(result.is_err());
    }
}
