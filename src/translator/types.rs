use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::prompt::build_prompt;
use crate::constants::{MAX_GENERATION_TOKENS, RETURN_LIKELIHOODS_NONE, STOP_SEQUENCE};
use crate::modes::TranslationMode;

/// Body of a Cohere `/v1/generate` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: usize,
    pub temperature: f64,
    pub stop_sequences: Vec<String>,
    pub return_likelihoods: String,
}

impl GenerateRequest {
    /// Request for one translation of `input_text` in `mode`
    pub fn for_translation(model: &str, input_text: &str, mode: TranslationMode) -> Self {
        Self {
            model: model.to_string(),
            prompt: build_prompt(input_text, mode),
            max_tokens: MAX_GENERATION_TOKENS,
            temperature: mode.temperature(),
            stop_sequences: vec![STOP_SEQUENCE.to_string()],
            return_likelihoods: RETURN_LIKELIHOODS_NONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub generations: Vec<Generation>,
}

impl GenerateResponse {
    /// Text of the first candidate, if there is one
    pub fn first_text(&self) -> Option<&str> {
        self.generations.first().map(|g| g.text.as_str())
    }
}

/// One generated candidate
#[derive(Debug, Clone, Deserialize)]
pub struct Generation {
    pub text: String,
}

impl Generation {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Text and mode captured at the moment the user asked for a translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub input_text: String,
    pub mode: TranslationMode,
}

impl TranslationRequest {
    /// Trims the input; blank input yields no request
    pub fn new(input_text: &str, mode: TranslationMode) -> Option<Self> {
        let trimmed = input_text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            input_text: trimmed.to_string(),
            mode,
        })
    }
}

/// The outcome shown on the result card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub mode: TranslationMode,
    pub result: String,
    pub glyph: String,
    pub input_text: String,
    pub completed_at: DateTime<Local>,
}

impl TranslationResult {
    pub fn new(request: TranslationRequest, result: String) -> Self {
        Self {
            glyph: request.mode.glyph().to_string(),
            mode: request.mode,
            result,
            input_text: request.input_text,
            completed_at: Local::now(),
        }
    }

    /// Replace the mode glyph, used for failure cards
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateRequest::for_translation("command", "hey", TranslationMode::Chaotic);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], json!("command"));
        assert_eq!(value["max_tokens"], json!(100));
        assert_eq!(value["temperature"], json!(1.2));
        assert_eq!(value["stop_sequences"], json!(["\n"]));
        assert_eq!(value["return_likelihoods"], json!("NONE"));
        assert!(value["prompt"].as_str().unwrap().contains("\"hey\""));
    }

    #[test]
    fn test_response_first_candidate_only() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "id": "abc",
            "generations": [
                { "id": "g1", "text": " first " },
                { "id": "g2", "text": "second" }
            ]
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some(" first "));

        let empty: GenerateResponse = serde_json::from_value(json!({ "id": "abc" })).unwrap();
        assert_eq!(empty.first_text(), None);
    }

    #[test]
    fn test_translation_request_trims() {
        let request = TranslationRequest::new("  u up?\n", TranslationMode::Soft).unwrap();
        assert_eq!(request.input_text, "u up?");
        assert!(TranslationRequest::new(" \t\n", TranslationMode::Soft).is_none());
    }

    #[test]
    fn test_result_uses_mode_glyph() {
        let request = TranslationRequest::new("hi", TranslationMode::Savage).unwrap();
        let result = TranslationResult::new(request, "They are bored.".to_string());
        assert_eq!(result.glyph, "💀");
        assert_eq!(result.mode, TranslationMode::Savage);
        assert_eq!(result.input_text, "hi");

        let failed = result.with_glyph("😓");
        assert_eq!(failed.glyph, "😓");
    }
}
