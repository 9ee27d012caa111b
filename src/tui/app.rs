use super::input::InputAction;
use crate::constants::SPINNER_FRAMES;
use crate::controller::{Controller, PendingTranslation};

/// Terminal UI state wrapped around the controller
pub struct App {
    /// Input, mode, and last result
    pub controller: Controller,
    /// Is the app running?
    pub running: bool,
    /// Frame counter for the busy spinner
    pub tick: usize,
    /// Show the completion time on the result card
    pub show_timestamps: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(controller: Controller, show_timestamps: bool) -> Self {
        let status_message = if controller.client().has_credential() {
            None
        } else {
            Some("No Cohere API key found. Set COHERE_API_KEY or run `crushor init`.".to_string())
        };

        Self {
            controller,
            running: true,
            tick: 0,
            show_timestamps,
            status_message,
        }
    }

    /// Apply a key action. Returns the translation to run when one starts.
    pub fn apply(&mut self, action: InputAction) -> Option<PendingTranslation> {
        match action {
            InputAction::Submit => {
                let pending = self.controller.begin_translation();
                if pending.is_some() {
                    self.clear_status();
                }
                return pending;
            }
            InputAction::Quit => self.quit(),
            InputAction::Insert(c) => self.controller.push_char(c),
            InputAction::Delete => self.controller.pop_char(),
            InputAction::ClearInput => self.controller.clear_input(),
            InputAction::NextMode => self.controller.cycle_mode(),
            InputAction::PrevMode => self.controller.cycle_mode_reverse(),
            InputAction::SelectMode(mode) => self.controller.select_mode(mode),
            InputAction::None => {}
        }
        None
    }

    /// Apply a finished translation; `None` means the task died
    pub fn finish(&mut self, pending: PendingTranslation, result: Option<String>) {
        match result {
            Some(text) => self.controller.complete_translation(pending, text),
            None => self.controller.fail_translation(pending),
        };
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }

    /// Insert pasted text; line breaks become spaces so a paste never submits
    pub fn paste(&mut self, text: &str) {
        let text: String = text
            .chars()
            .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
            .collect();
        self.controller.push_str(&text);
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}
