//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use std::time::Duration;

use arrrg_derive::CommandLine;

use crate::error::{Error, Result};
use crate::persona::Persona;
use crate::types::{DEFAULT_CONTEXT_WINDOW, Model};

/// Command-line arguments for the folio-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for replies.
    #[arrrg(optional, "Model to use (default: gemini-3-flash-preview)", "MODEL")]
    pub model: Option<String>,

    /// YAML file overriding the built-in persona.
    #[arrrg(optional, "Persona YAML file", "PATH")]
    pub persona: Option<String>,

    /// Base URL of the completion service.
    #[arrrg(optional, "Completion service base URL", "URL")]
    pub base_url: Option<String>,

    /// Turns of history sent with each message.
    #[arrrg(optional, "Turns of context per request (default: 5)", "TURNS")]
    pub context_window: Option<u32>,

    /// Maximum tokens per reply.
    #[arrrg(optional, "Max tokens per reply (default: 500)", "TOKENS")]
    pub max_output_tokens: Option<u32>,

    /// Optional request timeout.
    #[arrrg(optional, "Request timeout in seconds (default: none)", "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,

    /// Log every request and response to stderr.
    #[arrrg(flag, "Log requests and responses to stderr")]
    pub trace: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Model, directive, greeting, and sampling parameters.
    pub persona: Persona,

    /// Turns of history sent with each request.
    pub context_window: usize,

    /// Completion service base URL; `None` uses the public endpoint.
    pub base_url: Option<String>,

    /// Request timeout; `None` waits for the transport to settle.
    pub timeout: Option<Duration>,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Whether to log all completion traffic to stderr.
    pub trace: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Persona: the built-in design strategist
    /// - Context window: 5 turns
    /// - Timeout: none
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            persona: Persona::default(),
            context_window: DEFAULT_CONTEXT_WINDOW,
            base_url: None,
            timeout: None,
            use_color: true,
            trace: false,
        }
    }

    /// Sets the persona.
    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    /// Sets the model, keeping the rest of the persona.
    pub fn with_model(mut self, model: Model) -> Self {
        self.persona.model = model;
        self
    }

    /// Sets the context window.
    pub fn with_context_window(mut self, turns: usize) -> Self {
        self.context_window = turns;
        self
    }

    /// Sets the completion service base URL.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Enables request/response tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<ChatArgs> for ChatConfig {
    type Error = Error;

    fn try_from(args: ChatArgs) -> Result<Self> {
        let mut persona = match args.persona {
            Some(path) => Persona::from_file(path)?,
            None => Persona::default(),
        };
        if let Some(model) = args.model {
            persona.model = model.parse::<Model>().unwrap_or(Model::Custom(model));
        }
        if let Some(max_output_tokens) = args.max_output_tokens {
            persona.max_output_tokens = max_output_tokens;
        }
        persona.validate()?;

        Ok(ChatConfig {
            persona,
            context_window: args
                .context_window
                .map(|turns| turns as usize)
                .unwrap_or(DEFAULT_CONTEXT_WINDOW),
            base_url: args.base_url,
            timeout: args.timeout_secs.map(Duration::from_secs),
            use_color: !args.no_color,
            trace: args.trace,
        })
    }
}
