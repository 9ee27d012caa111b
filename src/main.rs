use anyhow::Result;
use clap::Parser;

use crushor::{
    app::log_file_path,
    cli::Cli,
    runtime::Orchestrator,
    utils::{init_file_logger, init_logger},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging if verbose; the TUI owns the screen, so it logs to a file
    if cli.verbose {
        let interactive = cli.message.is_none() && cli.command.is_none();
        if interactive {
            init_file_logger(&log_file_path()?)?;
        } else {
            init_logger();
        }
    }

    let orchestrator = Orchestrator::new(cli)?;
    orchestrator.run().await
}
