use std::sync::Arc;
use tracing::{info, warn};

use crate::constants::{TASK_FAILURE_GLYPH, TASK_FAILURE_MESSAGE};
use crate::modes::TranslationMode;
use crate::translator::{TranslationClient, TranslationRequest, TranslationResult};

/// A translation that has been issued but not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTranslation {
    /// Monotonic id; only the latest issued one may update the result
    pub sequence: u64,
    /// Input and mode as they were when the user hit translate
    pub request: TranslationRequest,
}

/// Input text, selected mode, in-flight flag, and the last result.
///
/// Idle -> Translating on `begin_translation`, back to Idle when the issued
/// request completes. Failures are ordinary results.
pub struct Controller {
    client: Arc<TranslationClient>,
    input_text: String,
    selected_mode: TranslationMode,
    is_translating: bool,
    last_result: Option<TranslationResult>,
    last_issued: u64,
}

impl Controller {
    /// Create a controller with empty input in the default mode
    pub fn new(client: Arc<TranslationClient>) -> Self {
        Self {
            client,
            input_text: String::new(),
            selected_mode: TranslationMode::default(),
            is_translating: false,
            last_result: None,
            last_issued: 0,
        }
    }

    pub fn with_input(mut self, text: impl Into<String>) -> Self {
        self.input_text = text.into();
        self
    }

    pub fn with_mode(mut self, mode: TranslationMode) -> Self {
        self.selected_mode = mode;
        self
    }

    pub fn client(&self) -> Arc<TranslationClient> {
        Arc::clone(&self.client)
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn selected_mode(&self) -> TranslationMode {
        self.selected_mode
    }

    pub fn is_translating(&self) -> bool {
        self.is_translating
    }

    pub fn last_result(&self) -> Option<&TranslationResult> {
        self.last_result.as_ref()
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input_text.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.input_text.push_str(text);
    }

    pub fn pop_char(&mut self) {
        self.input_text.pop();
    }

    pub fn clear_input(&mut self) {
        self.input_text.clear();
    }

    pub fn select_mode(&mut self, mode: TranslationMode) {
        self.selected_mode = mode;
    }

    pub fn cycle_mode(&mut self) {
        self.selected_mode = self.selected_mode.cycle();
    }

    pub fn cycle_mode_reverse(&mut self) {
        self.selected_mode = self.selected_mode.cycle_reverse();
    }

    /// Whether the translate trigger should be enabled
    pub fn can_translate(&self) -> bool {
        !self.is_translating && !self.input_text.trim().is_empty()
    }

    /// Capture the current input and mode and mark a translation in flight.
    ///
    /// Returns `None` (and changes nothing) when the input is blank or a
    /// translation is already running.
    pub fn begin_translation(&mut self) -> Option<PendingTranslation> {
        if self.is_translating {
            return None;
        }
        let request = TranslationRequest::new(&self.input_text, self.selected_mode)?;

        self.last_issued += 1;
        self.is_translating = true;
        info!(
            "Translating #{}: mode={}, input={:?}",
            self.last_issued, request.mode, request.input_text
        );

        Some(PendingTranslation {
            sequence: self.last_issued,
            request,
        })
    }

    /// Apply a finished translation. Returns false if it was stale and dropped.
    pub fn complete_translation(&mut self, pending: PendingTranslation, result: String) -> bool {
        if pending.sequence != self.last_issued {
            warn!(
                "Dropping stale translation #{} (latest is #{})",
                pending.sequence, self.last_issued
            );
            return false;
        }

        info!("Translation #{} result: {}", pending.sequence, result);
        self.last_result = Some(TranslationResult::new(pending.request, result));
        self.is_translating = false;
        true
    }

    /// Apply the failure card when the translation task itself died
    pub fn fail_translation(&mut self, pending: PendingTranslation) -> bool {
        if pending.sequence != self.last_issued {
            warn!(
                "Dropping stale failure for translation #{} (latest is #{})",
                pending.sequence, self.last_issued
            );
            return false;
        }

        self.last_result = Some(
            TranslationResult::new(pending.request, TASK_FAILURE_MESSAGE.to_string())
                .with_glyph(TASK_FAILURE_GLYPH),
        );
        self.is_translating = false;
        true
    }

    /// Run a whole translation inline: guard, call the client, apply the result
    pub async fn translate(&mut self) -> Option<&TranslationResult> {
        let pending = self.begin_translation()?;
        let result = self
            .client
            .translate(&pending.request.input_text, pending.request.mode)
            .await;
        self.complete_translation(pending, result);
        self.last_result.as_ref()
    }
}
