//! The remote completion client.
//!
//! [`CompletionClient`] turns a prompt plus a slice of prior turns into one
//! `generateContent` call and normalizes whatever comes back into a reply
//! string. It never fails outward: transport and service errors become
//! [`FAILURE_FALLBACK`], and an empty result becomes
//! [`EMPTY_REPLY_FALLBACK`].

use std::sync::Arc;

use crate::client::{ContentGenerator, Gemini};
use crate::client_logger::CompletionLogger;
use crate::error::Result;
use crate::observability::{COMPLETION_EMPTY_REPLIES, COMPLETION_FAILURES, COMPLETION_REPLIES};
use crate::persona::Persona;
use crate::types::{GenerateContentRequest, Turn};

/// Reply used when the service succeeds but produces no text.
pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm having a brief creative block. Could you rephrase that?";

/// Reply used when the transport or the service fails.
pub const FAILURE_FALLBACK: &str =
    "The design server is currently updating. Please try again in a moment.";

/// Produces an assistant reply for a prompt and its context window.
///
/// The chat session depends only on this trait, so any backend (or a
/// scripted test double) can stand in for the remote service.
#[async_trait::async_trait]
pub trait Completer: Send + Sync {
    /// Generate a reply to `prompt` given the `history` that preceded it.
    async fn complete(&self, prompt: &str, history: &[Turn]) -> Result<String>;
}

#[async_trait::async_trait]
impl<C: Completer + ?Sized> Completer for Arc<C> {
    async fn complete(&self, prompt: &str, history: &[Turn]) -> Result<String> {
        (**self).complete(prompt, history).await
    }
}

/// Replace an empty reply with [`EMPTY_REPLY_FALLBACK`]. Whitespace is a reply.
pub fn normalize_reply(text: String) -> String {
    if text.is_empty() {
        EMPTY_REPLY_FALLBACK.to_string()
    } else {
        text
    }
}

/// Adapter from `(prompt, history)` to a single remote completion.
pub struct CompletionClient<G: ContentGenerator = Gemini> {
    generator: G,
    persona: Persona,
    logger: Option<Arc<dyn CompletionLogger>>,
}

impl CompletionClient<Gemini> {
    /// Creates a completion client over the HTTP transport.
    pub fn new(client: Gemini, persona: Persona) -> Self {
        Self::with_generator(client, persona)
    }
}

impl<G: ContentGenerator> CompletionClient<G> {
    /// Creates a completion client over any content generator.
    pub fn with_generator(generator: G, persona: Persona) -> Self {
        Self {
            generator,
            persona,
            logger: None,
        }
    }

    /// Attaches a logger that sees every request, response, and absorbed error.
    pub fn with_logger(mut self, logger: Arc<dyn CompletionLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The persona this client speaks with.
    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Build the request for a prompt: history turns keep their roles, the
    /// prompt goes last as a user turn, and the persona supplies the system
    /// instruction and generation parameters.
    pub fn build_request(&self, prompt: &str, history: &[Turn]) -> GenerateContentRequest {
        GenerateContentRequest::from_history(history, prompt)
            .with_system_instruction(self.persona.system_instruction.clone())
            .with_generation_config(self.persona.generation_config())
    }

    /// Issue the request and return the raw reply text, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns any transport or service error unchanged.
    pub async fn try_reply(&self, prompt: &str, history: &[Turn]) -> Result<String> {
        let request = self.build_request(prompt, history);
        if let Some(logger) = &self.logger {
            logger.log_request(&request);
        }
        let response = self
            .generator
            .generate_content(&self.persona.model, &request)
            .await?;
        if let Some(logger) = &self.logger {
            logger.log_response(&response);
        }
        Ok(response.text())
    }

    /// Produce a reply, substituting the fixed fallbacks for empty results
    /// and failures.
    pub async fn reply(&self, prompt: &str, history: &[Turn]) -> String {
        match self.try_reply(prompt, history).await {
            Ok(text) if text.is_empty() => {
                COMPLETION_EMPTY_REPLIES.click();
                EMPTY_REPLY_FALLBACK.to_string()
            }
            Ok(text) => {
                COMPLETION_REPLIES.click();
                text
            }
            Err(err) => {
                COMPLETION_FAILURES.click();
                if let Some(logger) = &self.logger {
                    logger.log_error(&err);
                }
                FAILURE_FALLBACK.to_string()
            }
        }
    }
}

#[async_trait::async_trait]
impl<G: ContentGenerator> Completer for CompletionClient<G> {
    async fn complete(&self, prompt: &str, history: &[Turn]) -> Result<String> {
        Ok(self.reply(prompt, history).await)
    }
}
