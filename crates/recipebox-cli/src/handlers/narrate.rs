//! Narrate command handler.

use std::thread;
use std::time::Duration;

use crate::bootstrap::{CliContext, Engine};
use crate::commands::EngineKind;
use crate::error::CliError;

const PLAYBACK_POLL: Duration = Duration::from_millis(100);

/// Print the narration script and optionally speak it to the end.
pub fn execute(
    ctx: &CliContext,
    recipe_id: &str,
    speak: bool,
    engine: EngineKind,
) -> Result<(), CliError> {
    let engine = Engine::new(engine);
    let (mut screen, _navigator) = ctx.open_screen(recipe_id, "Recipes", engine.port())?;
    println!("{}", screen.narration_script());

    if speak {
        screen.press_speak()?;
        // Narration never ends on its own; wait for the audio, then unmount.
        while engine.is_playing() {
            thread::sleep(PLAYBACK_POLL);
        }
    }
    screen.unmount();
    Ok(())
}
