use anyhow::Result;
use colored::Colorize;

use crate::{
    app::{get_config_dir, init_config, Config},
    constants::CONFIG_FILE_NAME,
    modes::TranslationMode,
};

use super::Commands;

/// Handle CLI subcommands
pub fn handle_command(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Init => {
            println!("Initializing Crushor configuration...");
            init_config()?;
            println!("Configuration initialized successfully!");
        }
        Commands::Modes => list_modes(),
        Commands::Version => show_version(),
        Commands::Status => show_status(config)?,
    }
    Ok(())
}

/// List translation modes
pub fn list_modes() {
    println!("Translation modes:");
    for mode in TranslationMode::ALL {
        println!(
            "  {} {:<8} temperature {}",
            mode.glyph(),
            mode.as_str().green(),
            mode.temperature()
        );
        println!("      {}", mode.system_prompt().dimmed());
    }
}

/// Show version information
pub fn show_version() {
    println!("Crushor v{}", env!("CARGO_PKG_VERSION"));
    println!("   What does your crush really mean?");
}

/// Show configuration and credential status
fn show_status(config: &Config) -> Result<()> {
    println!("Crushor Status:");
    println!();

    let config_path = get_config_dir()?.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!("  [OK] Configuration: {}", config_path.display());
    } else {
        println!("  [WARNING] Configuration: Not found (using defaults)");
    }

    if config.credential().is_some() {
        println!("  [OK] API key: Set");
    } else {
        println!(
            "  [ERROR] API key: Missing (set {} or cohere.api_key)",
            config.cohere.api_key_env
        );
    }

    println!("  Endpoint: {}", config.cohere.endpoint);
    println!("  Model: {}", config.cohere.model);
    println!("  Default mode: {}", config.ui.default_mode);
    println!();
    Ok(())
}
