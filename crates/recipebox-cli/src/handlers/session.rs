//! Session command handler.
//!
//! Replays a sequence of user and host events against one mounted screen,
//! printing the narration events it caused and the view after each event.
//! Actions refused by the screen (for example after `unmount`, or speak once
//! the screen was left) are reported and the replay continues.

use recipebox_core::{EventDisposition, InfoHint, ScreenEventKind};
use recipebox_screen::{RecipeDetailsScreen, ScreenError, StackNavigator};

use crate::bootstrap::{CliContext, Engine};
use crate::commands::{EngineKind, SessionEvent};
use crate::error::CliError;
use crate::presentation::render_view;

/// Arguments for the session command.
pub struct SessionArgs<'a> {
    pub recipe_id: &'a str,
    pub events: &'a [SessionEvent],
    pub from: &'a str,
    pub engine: EngineKind,
    pub json: bool,
}

/// Result of applying one event, for display.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied(String),
    Refused(String),
}

/// Run the session and print a transcript.
pub fn execute(ctx: &CliContext, args: &SessionArgs<'_>) -> Result<(), CliError> {
    let engine = Engine::new(args.engine);
    let (mut screen, navigator) = ctx.open_screen(args.recipe_id, args.from, engine.port())?;
    let mut narration_events = screen.take_narration_events();

    for (step, event) in args.events.iter().enumerate() {
        let outcome = apply(&mut screen, &navigator, *event);
        match &outcome {
            Outcome::Applied(note) => println!("[{}] {event:?}: {note}", step + 1),
            Outcome::Refused(reason) => {
                tracing::warn!(?event, %reason, "Session event refused");
                println!("[{}] {event:?}: refused ({reason})", step + 1);
            }
        }
        if let Some(events) = narration_events.as_mut() {
            for narration in std::iter::from_fn(|| events.try_recv().ok()) {
                println!("    narration: {narration:?}");
            }
        }
        println!("    screen: {}", navigator.current());

        if args.json {
            println!("{}", serde_json::to_string_pretty(&screen.view())?);
        } else {
            for line in render_view(&screen.view()).lines() {
                println!("    {line}");
            }
        }
    }
    Ok(())
}

/// Apply one event to the screen or its host.
pub fn apply(
    screen: &mut RecipeDetailsScreen,
    navigator: &StackNavigator,
    event: SessionEvent,
) -> Outcome {
    match event {
        SessionEvent::Speak => refused_or(screen.press_speak(), |state| format!("{state:?}")),
        SessionEvent::Stop => refused_or(screen.stop_narration(), |stopped| {
            let note = if stopped { "stopped" } else { "already idle" };
            note.to_string()
        }),
        SessionEvent::Back => refused_or(screen.press_back(), |()| {
            format!("back to {}", navigator.current())
        }),
        SessionEvent::HardwareBack => host_outcome(navigator.press_hardware_back()),
        SessionEvent::Blur => host_outcome(navigator.dispatch(ScreenEventKind::Blur)),
        SessionEvent::Focus => host_outcome(navigator.dispatch(ScreenEventKind::Focus)),
        SessionEvent::Favorite => {
            refused_or(screen.press_favorite(), |status| format!("{status:?}"))
        }
        SessionEvent::HintPrep => show_hint(screen, InfoHint::PrepTime),
        SessionEvent::HintCook => show_hint(screen, InfoHint::CookTime),
        SessionEvent::Dismiss => refused_or(screen.dismiss_hint(), |()| "dismissed".to_string()),
        SessionEvent::Unmount => {
            screen.unmount();
            Outcome::Applied("unmounted".to_string())
        }
    }
}

fn host_outcome(disposition: EventDisposition) -> Outcome {
    let note = match disposition {
        EventDisposition::Handled => "handled by screen",
        EventDisposition::Default => "host default",
    };
    Outcome::Applied(note.to_string())
}

fn show_hint(screen: &RecipeDetailsScreen, hint: InfoHint) -> Outcome {
    refused_or(screen.long_press_hint(hint), |()| format!("{hint:?} hint shown"))
}

fn refused_or<T>(result: Result<T, ScreenError>, describe: impl FnOnce(T) -> String) -> Outcome {
    match result {
        Ok(value) => Outcome::Applied(describe(value)),
        Err(e) => Outcome::Refused(e.to_string()),
    }
}
