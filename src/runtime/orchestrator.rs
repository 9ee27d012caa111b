use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::{
    app::{load_config_with, Config},
    cli::{handle_command, Cli},
    controller::Controller,
    translator::TranslationClient,
    tui::{run_ui, App},
};

/// Main runtime orchestrator
pub struct Orchestrator {
    cli: Cli,
    config: Config,
}

impl Orchestrator {
    /// Create a new orchestrator from CLI args
    pub fn new(cli: Cli) -> Result<Self> {
        // A broken layer is an error rather than a silent fallback to defaults
        let config = load_config_with(cli.config.as_deref())?;

        Ok(Self { cli, config })
    }

    /// Build the controller with the injected credential and starting state
    pub fn build_controller(&self) -> Controller {
        let credential = self.config.credential();
        let client = TranslationClient::from_config(&self.config, credential);
        let mode = self.cli.mode.unwrap_or(self.config.ui.default_mode);

        info!(
            "Using model {} at {} (API key {})",
            client.model(),
            self.config.cohere.endpoint,
            if client.has_credential() { "set" } else { "missing" }
        );

        Controller::new(Arc::new(client)).with_mode(mode)
    }

    /// Run a subcommand, the one-shot translation, or the TUI
    pub async fn run(self) -> Result<()> {
        if let Some(command) = &self.cli.command {
            return handle_command(command, &self.config);
        }

        if let Some(message) = self.cli.message.clone() {
            let runner = super::NonInteractiveRunner::new(self.build_controller());
            let result = runner.execute(&message).await;
            println!("{}", runner.format_result(&result, self.cli.output_format));
            return Ok(());
        }

        let controller = self
            .build_controller()
            .with_input(self.config.ui.initial_message.clone());
        let app = App::new(controller, self.config.ui.show_timestamps);

        run_ui(app).await
    }
}
