use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Represents a generative-language model identifier.
///
/// This can be a predefined model version or a custom string value
/// for models that may be added in the future.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Model {
    /// Known model versions
    Known(KnownModel),

    /// Custom model identifier (for future or tuned models)
    Custom(String),
}

/// Known Gemini model versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownModel {
    /// Gemini 3 Flash (preview)
    #[serde(rename = "gemini-3-flash-preview")]
    Gemini3FlashPreview,

    /// Gemini 2.5 Flash
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,

    /// Gemini 2.5 Pro
    #[serde(rename = "gemini-2.5-pro")]
    Gemini25Pro,

    /// Gemini 2.0 Flash
    #[serde(rename = "gemini-2.0-flash")]
    Gemini20Flash,
}

impl KnownModel {
    const ALL: [KnownModel; 4] = [
        KnownModel::Gemini3FlashPreview,
        KnownModel::Gemini25Flash,
        KnownModel::Gemini25Pro,
        KnownModel::Gemini20Flash,
    ];
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnownModel::Gemini3FlashPreview => write!(f, "gemini-3-flash-preview"),
            KnownModel::Gemini25Flash => write!(f, "gemini-2.5-flash"),
            KnownModel::Gemini25Pro => write!(f, "gemini-2.5-pro"),
            KnownModel::Gemini20Flash => write!(f, "gemini-2.0-flash"),
        }
    }
}

impl FromStr for KnownModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("models/").unwrap_or(s);
        KnownModel::ALL
            .iter()
            .copied()
            .find(|model| model.to_string() == s)
            .ok_or_else(|| Error::validation(format!("unknown model: {s}"), Some("model".into())))
    }
}

impl FromStr for Model {
    type Err = Error;

    /// Parses a known model name; use `Model::Custom` for anything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<KnownModel>().map(Model::Known)
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        Model::Custom(model)
    }
}

impl From<&str> for Model {
    fn from(model: &str) -> Self {
        Model::Custom(model.to_string())
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Known(KnownModel::Gemini3FlashPreview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_serialization() {
        let model = Model::Known(KnownModel::Gemini3FlashPreview);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gemini-3-flash-preview""#);

        let model = Model::Known(KnownModel::Gemini25Flash);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gemini-2.5-flash""#);
    }

    #[test]
    fn custom_model_roundtrips_as_string() {
        let model: Model = serde_json::from_str(r#""tuned-portfolio-v2""#).unwrap();
        assert_eq!(model, Model::Custom("tuned-portfolio-v2".to_string()));
        assert_eq!(model.to_string(), "tuned-portfolio-v2");
    }

    #[test]
    fn parse_known_and_prefixed() {
        assert_eq!(
            "gemini-2.5-pro".parse::<Model>().unwrap(),
            Model::Known(KnownModel::Gemini25Pro)
        );
        assert_eq!(
            "models/gemini-2.0-flash".parse::<Model>().unwrap(),
            Model::Known(KnownModel::Gemini20Flash)
        );
        assert!("not-a-model".parse::<Model>().is_err());
    }

    #[test]
    fn default_is_flash_preview() {
        assert_eq!(Model::default().to_string(), "gemini-3-flash-preview");
    }
}
