//! Integration tests for the `NarrationController` state machine.
//!
//! A recording engine counts `speak` and `stop` calls. Every trigger sequence
//! up to a fixed length is replayed against a fresh controller, and the
//! engine calls are checked against the transitions the controller reported.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use recipebox_core::{LanguageCode, SpeechEngine, SpeechError, Utterance};
use recipebox_voice::{NarrationController, NarrationEvent, NarrationState, StopTrigger};

// ── Recording engine ───────────────────────────────────────────────

#[derive(Default)]
struct RecordingEngine {
    speaks: AtomicUsize,
    stops: AtomicUsize,
}

impl SpeechEngine for RecordingEngine {
    fn speak(&self, _utterance: &Utterance) -> Result<(), SpeechError> {
        self.speaks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Speak,
    Stop,
    Back,
    Blur,
    Unmount,
}

const TRIGGERS: [Trigger; 5] = [
    Trigger::Speak,
    Trigger::Stop,
    Trigger::Back,
    Trigger::Blur,
    Trigger::Unmount,
];

fn script() -> Utterance {
    Utterance::new("The title of the recipe is Pancakes.", LanguageCode::En)
}

/// Replay a sequence; returns (speaking→idle transitions, idle→speaking transitions).
fn replay(engine: &Arc<RecordingEngine>, sequence: &[Trigger]) -> (usize, usize) {
    let (mut controller, _rx) = NarrationController::new(engine.clone());
    let mut to_idle = 0;
    let mut to_speaking = 0;

    for trigger in sequence {
        let before = controller.state();
        match trigger {
            Trigger::Speak => {
                controller.toggle(script).unwrap();
            }
            Trigger::Stop => {
                controller.stop(StopTrigger::UserStop);
            }
            Trigger::Back => {
                controller.stop(StopTrigger::HardwareBack);
            }
            Trigger::Blur => {
                controller.stop(StopTrigger::Blur);
            }
            Trigger::Unmount => {
                controller.stop(StopTrigger::Unmount);
                break;
            }
        }
        match (before, controller.state()) {
            (NarrationState::Speaking, NarrationState::Idle) => to_idle += 1,
            (NarrationState::Idle, NarrationState::Speaking) => to_speaking += 1,
            _ => {}
        }
    }

    // Teardown always forces Idle.
    if controller.is_speaking() {
        to_idle += 1;
    }
    drop(controller);
    (to_idle, to_speaking)
}

fn all_sequences(len: usize) -> Vec<Vec<Trigger>> {
    (0..len).fold(vec![Vec::new()], |acc, _| {
        acc.into_iter()
            .flat_map(|prefix| {
                TRIGGERS.iter().map(move |t| {
                    let mut next = prefix.clone();
                    next.push(*t);
                    next
                })
            })
            .collect()
    })
}

// ── Tests ──────────────────────────────────────────────────────────

#[test]
fn stop_calls_match_transitions_for_every_sequence() {
    for len in 0..=5 {
        for sequence in all_sequences(len) {
            let engine = Arc::new(RecordingEngine::default());
            let (to_idle, to_speaking) = replay(&engine, &sequence);

            assert_eq!(
                engine.stops.load(Ordering::SeqCst),
                to_idle,
                "stop count mismatch for {sequence:?}"
            );
            assert_eq!(
                engine.speaks.load(Ordering::SeqCst),
                to_speaking,
                "speak count mismatch for {sequence:?}"
            );
        }
    }
}

#[test]
fn speak_then_hardware_back_stops_once() {
    let engine = Arc::new(RecordingEngine::default());
    let (mut controller, mut rx) = NarrationController::new(engine.clone());

    controller.toggle(script).unwrap();
    assert!(controller.stop(StopTrigger::HardwareBack));
    // A blur delivered in the same navigation window is a no-op.
    assert!(!controller.stop(StopTrigger::Blur));
    drop(controller);

    assert_eq!(engine.speaks.load(Ordering::SeqCst), 1);
    assert_eq!(engine.stops.load(Ordering::SeqCst), 1);

    let mut stopped = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let NarrationEvent::Stopped { trigger } = event {
            stopped.push(trigger);
        }
    }
    assert_eq!(stopped, vec![StopTrigger::HardwareBack]);
}

#[test]
fn narration_does_not_end_on_its_own() {
    let engine = Arc::new(RecordingEngine::default());
    let (mut controller, _rx) = NarrationController::new(engine.clone());

    controller.toggle(script).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert_eq!(controller.state(), NarrationState::Speaking);
}
