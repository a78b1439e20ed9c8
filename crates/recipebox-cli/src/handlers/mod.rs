//! Command handlers.

pub mod list;
pub mod narrate;
pub mod session;
pub mod show;
