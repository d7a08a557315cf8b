use std::fmt;

use serde::{Deserialize, Serialize};

/// Who produced a turn in the conversation.
///
/// Serialized with the completion service's role names, so the assistant
/// is `model` on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    /// The portfolio visitor.
    #[serde(rename = "user")]
    User,

    /// The design-strategist assistant.
    #[serde(rename = "model")]
    Assistant,
}

impl Speaker {
    /// Returns the role string the completion service expects.
    pub fn as_role(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "model",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "You"),
            Speaker::Assistant => write!(f, "Strategist"),
        }
    }
}

/// One message in the chat transcript, tagged by speaker.
///
/// Turns are immutable once created: fields are private and there are no
/// setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(rename = "role")]
    speaker: Speaker,
    text: String,
}

impl Turn {
    /// Create a new turn.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    /// Create a visitor turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    /// Create an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, text)
    }

    /// Who said it.
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    /// What was said.
    pub fn text(&self) -> &str {
        &self.text
    }
}
