// Public modules
pub mod chat;
pub mod client;
pub mod client_logger;
pub mod completion;
pub mod error;
pub mod observability;
pub mod persona;
pub mod portfolio;
pub mod render;
pub mod types;

// Re-exports
pub use client::{API_KEY_ENV, ContentGenerator, Gemini};
pub use client_logger::{CompletionLogger, StderrLogger, TraceLogger};
pub use completion::{
    Completer, CompletionClient, EMPTY_REPLY_FALLBACK, FAILURE_FALLBACK, normalize_reply,
};
pub use error::{Error, Result};
pub use observability::register_biometrics;
pub use persona::Persona;
pub use types::*;
