//! Persona configuration for the design-strategist assistant.
//!
//! A persona fixes everything about the assistant that is not the
//! conversation itself: which model answers, the behavioral directive sent
//! as the system instruction, the opening greeting, and the sampling
//! parameters. The built-in persona matches the portfolio site; a YAML file
//! can override any subset of fields:
//!
//! ```yaml
//! model: gemini-2.5-flash
//! temperature: 0.6
//! greeting: "Hi there! Ask me about the case studies."
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{GenerationConfig, Model};

/// Behavioral directive sent with every request.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = r#"You are the "AI Design Strategist" for a world-class Graphic and UI/UX Designer's portfolio.
Your goal is to represent the designer professionally but with a touch of modern creative flair.
When users ask questions, answer as if you are the designer's digital twin.
Mention design principles like:
- Visual Hierarchy
- Accessibility (WCAG)
- Typography as a voice
- The importance of user-centric research
- Minimalist aesthetics combined with functionality.

Keep responses concise, inspiring, and professional.
If asked about services, reference UI/UX design, branding, and graphic systems."#;

/// The assistant turn every transcript starts with.
pub const DEFAULT_GREETING: &str =
    "Hello! I'm your AI Design Strategist. Want to know more about the design process behind these works?";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Default nucleus-sampling threshold.
pub const DEFAULT_TOP_P: f32 = 0.95;

/// Default cap on reply length, in tokens.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;

/// Fixed persona and generation parameters for the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Persona {
    /// Model that generates replies.
    pub model: Model,

    /// System-level persona and tone directive.
    pub system_instruction: String,

    /// Opening assistant turn.
    pub greeting: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Nucleus-sampling threshold.
    pub top_p: f32,

    /// Output-length cap in tokens.
    pub max_output_tokens: u32,
}

impl Persona {
    /// Load a persona from a YAML file.
    ///
    /// Fields missing from the file keep their built-in values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// carries out-of-range sampling parameters.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|err| Error::io("failed to read persona file", err))?;
        Self::from_yaml(&content)
    }

    /// Parse a persona from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let persona: Self = serde_yaml::from_str(yaml)?;
        persona.validate()?;
        Ok(persona)
    }

    /// Check that sampling parameters are in range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::validation(
                "temperature must be between 0.0 and 2.0",
                Some("temperature".to_string()),
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(Error::validation(
                "top_p must be between 0.0 and 1.0",
                Some("top_p".to_string()),
            ));
        }
        if self.max_output_tokens == 0 {
            return Err(Error::validation(
                "max_output_tokens must be positive",
                Some("max_output_tokens".to_string()),
            ));
        }
        Ok(())
    }

    /// Sets the model.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the output-length cap.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Generation parameters for a request.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: Some(self.temperature),
            top_p: Some(self.top_p),
            max_output_tokens: Some(self.max_output_tokens),
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            model: Model::default(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KnownModel;

    #[test]
    fn default_persona() {
        let persona = Persona::default();
        assert_eq!(persona.model, Model::Known(KnownModel::Gemini3FlashPreview));
        assert_eq!(persona.temperature, 0.8);
        assert_eq!(persona.top_p, 0.95);
        assert_eq!(persona.max_output_tokens, 500);
        assert!(persona.system_instruction.contains("AI Design Strategist"));
        assert!(persona.greeting.starts_with("Hello!"));
        assert!(persona.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let persona = Persona::from_yaml("model: gemini-2.5-flash\ntemperature: 0.5\n").unwrap();
        assert_eq!(persona.model, Model::Known(KnownModel::Gemini25Flash));
        assert_eq!(persona.temperature, 0.5);
        assert_eq!(persona.top_p, DEFAULT_TOP_P);
        assert_eq!(persona.greeting, DEFAULT_GREETING);
    }

    #[test]
    fn custom_model_in_yaml() {
        let persona = Persona::from_yaml("model: portfolio-tuned-001\n").unwrap();
        assert_eq!(persona.model, Model::Custom("portfolio-tuned-001".to_string()));
    }

    #[test]
    fn out_of_range_values_rejected() {
        let err = Persona::from_yaml("top_p: 1.5\n").unwrap_err();
        assert!(err.is_validation());

        let err = Persona::from_yaml("max_output_tokens: 0\n").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn invalid_yaml_is_serialization_error() {
        let err = Persona::from_yaml("temperature: [not, a, number]\n").unwrap_err();
        assert!(matches!(err, Error::Serialization { .. }));
    }

    #[test]
    fn generation_config_mirrors_persona() {
        let config = Persona::default().with_max_output_tokens(64).generation_config();
        assert_eq!(config.temperature, Some(0.8));
        assert_eq!(config.top_p, Some(0.95));
        assert_eq!(config.max_output_tokens, Some(64));
    }
}
