#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod controller;
pub mod engine;
pub mod error;

// Re-export key types for convenience
pub use controller::{NarrationController, NarrationEvent, NarrationState, StopTrigger};
pub use engine::{CommandEngineConfig, CommandSpeechEngine, LogSpeechEngine};
pub use error::NarrationError;
