use colored::Colorize;
use serde::Serialize;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::cli::OutputFormat;
use crate::constants::BLANK_MESSAGE_NOTICE;
use crate::controller::Controller;
use crate::modes::TranslationMode;

/// Result of a one-shot run
#[derive(Debug, Serialize)]
pub struct NonInteractiveResult {
    /// The message as sent (trimmed)
    pub message: String,
    /// Mode used
    pub mode: TranslationMode,
    /// Mode glyph
    pub glyph: String,
    /// What they really meant, or the user-facing error text
    pub translation: String,
    /// Execution time in milliseconds
    pub duration_ms: u128,
}

/// Runs a single translation through the controller and prints it
pub struct NonInteractiveRunner {
    controller: Mutex<Controller>,
}

impl NonInteractiveRunner {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }

    /// Translate `message` in the controller's selected mode
    pub async fn execute(&self, message: &str) -> NonInteractiveResult {
        let start = Instant::now();
        let mut controller = self.controller.lock().await;
        controller.set_input_text(message);
        let mode = controller.selected_mode();

        match controller.translate().await {
            Some(result) => NonInteractiveResult {
                message: result.input_text.clone(),
                mode: result.mode,
                glyph: result.glyph.clone(),
                translation: result.result.clone(),
                duration_ms: start.elapsed().as_millis(),
            },
            // Blank input never reaches the client
            None => NonInteractiveResult {
                message: String::new(),
                mode,
                glyph: mode.glyph().to_string(),
                translation: BLANK_MESSAGE_NOTICE.to_string(),
                duration_ms: start.elapsed().as_millis(),
            },
        }
    }

    /// Format the result for stdout
    pub fn format_result(&self, result: &NonInteractiveResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(result).unwrap_or_else(|e| {
                format!("{{\"error\": \"Failed to serialize result: {}\"}}", e)
            }),
            OutputFormat::Text => format!(
                "{} {}\nOriginal message: \"{}\"\n{}",
                result.glyph,
                result.mode.display_name().bold(),
                result.message,
                result.translation
            ),
        }
    }
}
