//! The portfolio chat assistant.
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: the transcript, the single-flight guard, and reply handling
//! - [`commands`]: slash command parsing for the REPL

mod commands;
mod config;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use session::{ChatSession, SessionState, SessionStats, Submission};
