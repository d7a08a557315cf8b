use serde::{Deserialize, Serialize};

use crate::types::{Speaker, Turn};

/// A piece of content in a `generateContent` exchange.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Part {
    /// Inline text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Set on parts that carry the model's internal reasoning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            thought: None,
        }
    }

    fn is_thought(&self) -> bool {
        self.thought.unwrap_or(false)
    }
}

/// A role-tagged list of parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Content {
    /// Who produced the content. Omitted for the system instruction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Speaker>,

    /// The content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a single-text content for the given speaker.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            role: Some(speaker),
            parts: vec![Part::text(text)],
        }
    }

    /// Create a role-less content, as used for system instructions.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }

    /// Concatenated text of all non-thought parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter(|part| !part.is_thought())
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        Content::new(turn.speaker(), turn.text())
    }
}

/// Sampling and length controls for a request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus-sampling threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Cap on generated tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents, oldest first, ending with the new prompt.
    pub contents: Vec<Content>,

    /// Persona and tone directive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,

    /// Sampling parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Build a request from prior turns followed by a new user prompt.
    pub fn from_history(history: &[Turn], prompt: &str) -> Self {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::new(Speaker::User, prompt));
        Self {
            contents,
            system_instruction: None,
            generation_config: None,
        }
    }

    /// Attach a system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::system(instruction));
        self
    }

    /// Attach generation parameters.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

/// One generated alternative.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content; absent when the candidate was filtered.
    #[serde(default)]
    pub content: Option<Content>,

    /// Why generation stopped, e.g. `STOP` or `MAX_TOKENS`.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Set when the prompt was blocked.
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token accounting returned by the service.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt.
    #[serde(default)]
    pub prompt_token_count: Option<u32>,

    /// Tokens across generated candidates.
    #[serde(default)]
    pub candidates_token_count: Option<u32>,

    /// Total tokens billed.
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

/// Response body for `generateContent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates; usually one.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Present when the prompt was rejected.
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,

    /// Token usage.
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Text of the first candidate; empty when there is none.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(Content::text)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn request_serializes_in_service_shape() {
        let history = vec![
            Turn::assistant("Hello! I'm your AI Design Strategist."),
            Turn::user("Hi"),
        ];
        let request = GenerateContentRequest::from_history(&history, "What tools do you use?")
            .with_system_instruction("Be concise.")
            .with_generation_config(GenerationConfig {
                temperature: Some(0.8),
                top_p: Some(0.95),
                max_output_tokens: Some(500),
            });

        assert_eq!(
            to_value(&request).unwrap(),
            json!({
                "contents": [
                    {"role": "model", "parts": [{"text": "Hello! I'm your AI Design Strategist."}]},
                    {"role": "user", "parts": [{"text": "Hi"}]},
                    {"role": "user", "parts": [{"text": "What tools do you use?"}]}
                ],
                "systemInstruction": {"parts": [{"text": "Be concise."}]},
                "generationConfig": {
                    "temperature": 0.8_f32,
                    "topP": 0.95_f32,
                    "maxOutputTokens": 500
                }
            })
        );
    }

    #[test]
    fn response_text_joins_parts_and_skips_thoughts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "planning...", "thought": true},
                        {"text": "Figma for "},
                        {"text": "everything."}
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4, "totalTokenCount": 16}
        }))
        .unwrap();

        assert_eq!(response.text(), "Figma for everything.");
        assert_eq!(
            response.usage_metadata.and_then(|u| u.total_token_count),
            Some(16)
        );
    }

    #[test]
    fn response_without_candidates_is_empty() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        assert_eq!(response.text(), "");
        assert_eq!(
            response.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );

        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(response.text(), "");
    }
}
