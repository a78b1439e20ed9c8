//! Show command handler.

use crate::bootstrap::{CliContext, Engine};
use crate::commands::EngineKind;
use crate::error::CliError;
use crate::presentation::render_view;

/// Mount the details screen once and print its view.
pub fn execute(ctx: &CliContext, recipe_id: &str, json: bool) -> Result<(), CliError> {
    let engine = Engine::new(EngineKind::Log);
    let (screen, _navigator) = ctx.open_screen(recipe_id, "Recipes", engine.port())?;
    let view = screen.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_view(&view));
    }
    Ok(())
}
