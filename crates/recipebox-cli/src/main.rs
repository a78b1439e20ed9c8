//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use recipebox_cli::handlers::{self, session::SessionArgs};
use recipebox_cli::{Cli, CliConfig, CliError, Commands, bootstrap};

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::from_cli(&cli);
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(&config)?;

    match command {
        Commands::List => handlers::list::execute(&ctx),
        Commands::Show { recipe_id, json } => handlers::show::execute(&ctx, &recipe_id, json)?,
        Commands::Narrate {
            recipe_id,
            speak,
            engine,
        } => handlers::narrate::execute(&ctx, &recipe_id, speak, engine)?,
        Commands::Session {
            recipe_id,
            events,
            from,
            engine,
            json,
        } => {
            let args = SessionArgs {
                recipe_id: &recipe_id,
                events: &events,
                from: &from,
                engine,
                json,
            };
            handlers::session::execute(&ctx, &args)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads RECIPEBOX_*
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
    Ok(())
}
