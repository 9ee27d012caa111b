use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_API_KEY_ENV, DEFAULT_COHERE_ENDPOINT, DEFAULT_COHERE_MODEL,
    DEFAULT_INITIAL_MESSAGE, ENV_PREFIX, LOCAL_CONFIG_PATH, LOG_FILE_NAME,
};
use crate::modes::TranslationMode;
use crate::translator::Credential;
use crate::utils::CrushorError;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Cohere API configuration
    #[serde(default)]
    pub cohere: CohereConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UIConfig,
}

/// Cohere configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CohereConfig {
    /// API key stored in the config file (the env var wins when both are set)
    pub api_key: Option<String>,
    /// Environment variable containing the API key
    pub api_key_env: String,
    /// Generate endpoint
    pub endpoint: String,
    /// Model identifier
    pub model: String,
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            endpoint: DEFAULT_COHERE_ENDPOINT.to_string(),
            model: DEFAULT_COHERE_MODEL.to_string(),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Mode selected at startup
    pub default_mode: TranslationMode,
    /// Text prefilled in the message box
    pub initial_message: String,
    /// Show when the last translation completed
    pub show_timestamps: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            default_mode: TranslationMode::default(),
            initial_message: DEFAULT_INITIAL_MESSAGE.to_string(),
            show_timestamps: true,
        }
    }
}

impl Config {
    /// Resolve the API key from the environment, then the config file
    pub fn credential(&self) -> Option<Credential> {
        self.credential_with(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::credential`] with an injectable variable lookup
    pub fn credential_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<Credential> {
        lookup(&self.cohere.api_key_env)
            .and_then(Credential::new)
            .or_else(|| self.cohere.api_key.clone().and_then(Credential::new))
    }
}

/// Load configuration from the global file, the local file, and the environment
pub fn load_config() -> Result<Config> {
    load_config_with(None)
}

/// Load configuration, layering `explicit` on top of the standard files
pub fn load_config_with(explicit: Option<&Path>) -> Result<Config> {
    let mut files = Vec::new();

    let global_config = get_config_dir()?.join(CONFIG_FILE_NAME);
    if global_config.exists() {
        files.push(global_config);
    }

    let local_config = PathBuf::from(LOCAL_CONFIG_PATH);
    if local_config.exists() {
        files.push(local_config);
    }

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CrushorError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            ))
            .into());
        }
        files.push(path.to_path_buf());
    }

    extract_config(&files)
}

/// Defaults, then each file in order, then `CRUSHOR_` env vars
fn extract_config(files: &[PathBuf]) -> Result<Config> {
    // CRUSHOR_COHERE__MODEL=command-light -> cohere.model
    let figment = file_figment(files).merge(Env::prefixed(ENV_PREFIX).split("__"));
    extract(figment)
}

/// Defaults, then each file in order
fn file_figment(files: &[PathBuf]) -> Figment {
    files.iter().fold(
        Figment::from(Serialized::defaults(Config::default())),
        |figment, file| figment.merge(Toml::file(file)),
    )
}

fn extract(figment: Figment) -> Result<Config> {
    // figment errors name the offending key and its source
    figment
        .extract()
        .map_err(|e| CrushorError::ConfigError(e.to_string()))
        .context("Failed to load configuration")
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "crushor") {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let config_dir = PathBuf::from(home).join(".config").join("crushor");
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}

/// Where the TUI writes its log when running verbose
pub fn log_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(LOG_FILE_NAME))
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join(CONFIG_FILE_NAME)
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
pub fn init_config() -> Result<()> {
    let config_dir = get_config_dir()?;
    let config_file = config_dir.join(CONFIG_FILE_NAME);

    if !config_file.exists() {
        save_config(&Config::default(), Some(config_file.clone()))?;
        println!("Created default configuration at: {}", config_file.display());
    }

    // Create example local config
    let local_example = PathBuf::from(format!("{}.example", LOCAL_CONFIG_PATH));
    if !local_example.exists() {
        if let Some(parent) = local_example.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let example_config = r#"# Crushor Project Configuration
# This file overrides global settings for this directory

[cohere]
# Prefer the COHERE_API_KEY environment variable over storing the key here
api_key_env = "COHERE_API_KEY"
model = "command"

[ui]
default_mode = "soft"
initial_message = "u up?"
show_timestamps = true
"#;
        std::fs::write(&local_example, example_config)?;
        println!("Created example configuration at: {}", local_example.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cohere.endpoint, "https://api.cohere.ai/v1/generate");
        assert_eq!(config.cohere.model, "command");
        assert_eq!(config.cohere.api_key_env, "COHERE_API_KEY");
        assert_eq!(config.ui.default_mode, TranslationMode::Honest);
        assert_eq!(config.ui.initial_message, "Can't stop thinking about you 😊");
    }

    #[test]
    fn test_files_layer_in_order() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");

        std::fs::write(
            &global,
            "[cohere]\nmodel = \"command-light\"\napi_key = \"from-global\"\n\n[ui]\ndefault_mode = \"savage\"\n",
        )
        .unwrap();
        std::fs::write(&local, "[ui]\ndefault_mode = \"chaotic\"\n").unwrap();

        let config = extract(file_figment(&[global, local])).unwrap();
        assert_eq!(config.cohere.model, "command-light");
        assert_eq!(config.cohere.api_key.as_deref(), Some("from-global"));
        assert_eq!(config.ui.default_mode, TranslationMode::Chaotic);
        // Untouched keys keep their defaults
        assert_eq!(config.cohere.endpoint, DEFAULT_COHERE_ENDPOINT);
        assert!(config.ui.show_timestamps);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bad.toml");
        std::fs::write(&file, "[ui]\ndefault_mode = \"sarcastic\"\n").unwrap();

        assert!(extract(file_figment(&[file])).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");

        let mut config = Config::default();
        config.ui.default_mode = TranslationMode::Soft;
        config.ui.initial_message = "u up?".to_string();
        save_config(&config, Some(file.clone())).unwrap();

        let loaded = extract(file_figment(&[file])).unwrap();
        assert_eq!(loaded.ui, config.ui);
    }

    #[test]
    fn test_credential_prefers_env_var() {
        let mut config = Config::default();
        config.cohere.api_key = Some("from-file".to_string());

        let credential = config
            .credential_with(|name| (name == "COHERE_API_KEY").then(|| "from-env".to_string()))
            .unwrap();
        assert_eq!(credential.expose(), "from-env");

        let credential = config.credential_with(|_| None).unwrap();
        assert_eq!(credential.expose(), "from-file");
    }

    #[test]
    fn test_blank_credential_counts_as_missing() {
        let mut config = Config::default();
        assert!(config.credential_with(|_| None).is_none());

        config.cohere.api_key = Some("  ".to_string());
        assert!(config.credential_with(|_| Some(String::new())).is_none());
    }

    #[test]
    fn test_custom_env_var_name() {
        let mut config = Config::default();
        config.cohere.api_key_env = "MY_COHERE_KEY".to_string();

        let credential =
            config.credential_with(|name| (name == "MY_COHERE_KEY").then(|| "k".to_string()));
        assert_eq!(credential.map(|c| c.expose().to_string()), Some("k".to_string()));
    }

    #[test]
    fn test_env_overrides_files() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                "[cohere]\nmodel = \"command-light\"\n\n[ui]\ndefault_mode = \"soft\"\n",
            )?;
            jail.set_env("CRUSHOR_COHERE__MODEL", "command-r");
            jail.set_env("CRUSHOR_UI__DEFAULT_MODE", "savage");

            let config = extract_config(&[PathBuf::from("config.toml")])
                .map_err(|e| format!("{:#}", e))?;
            assert_eq!(config.cohere.model, "command-r");
            assert_eq!(config.ui.default_mode, TranslationMode::Savage);
            assert_eq!(config.cohere.endpoint, DEFAULT_COHERE_ENDPOINT);
            Ok(())
        });
    }

    #[test]
    fn test_bad_env_value_names_the_key() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CRUSHOR_COHERE__API_KEY", "12345");

            let err = extract_config(&[]).unwrap_err();
            let message = format!("{:#}", err);
            assert!(message.contains("Failed to load configuration"));
            assert!(message.to_lowercase().contains("api_key"), "{}", message);
            assert!(matches!(
                err.downcast_ref::<CrushorError>(),
                Some(CrushorError::ConfigError(_))
            ));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = load_config_with(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
        assert!(matches!(
            err.downcast_ref::<CrushorError>(),
            Some(CrushorError::ConfigError(_))
        ));
    }
}
