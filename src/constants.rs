/// Constants module to avoid magic numbers in the codebase

// Network Configuration
pub const DEFAULT_COHERE_ENDPOINT: &str = "https://api.cohere.ai/v1/generate";
pub const DEFAULT_COHERE_MODEL: &str = "command";
pub const DEFAULT_API_KEY_ENV: &str = "COHERE_API_KEY";

// Generation Parameters
pub const MAX_GENERATION_TOKENS: usize = 100;
pub const DEFAULT_TEMPERATURE: f64 = 0.8;
pub const CHAOTIC_TEMPERATURE: f64 = 1.2;
pub const STOP_SEQUENCE: &str = "\n";
pub const RETURN_LIKELIHOODS_NONE: &str = "NONE";

// User-facing messages
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "API key not configured. Please add your Cohere API key.";
pub const EMPTY_TRANSLATION_MESSAGE: &str = "Hmm... couldn't decode that. Try again!";
pub const TRANSLATION_FAILURE_MESSAGE: &str =
    "Something went wrong with the translation. Please try again.";
pub const TASK_FAILURE_MESSAGE: &str = "Something went wrong 💔 Please try again.";
pub const TASK_FAILURE_GLYPH: &str = "😓";
pub const DEFAULT_INITIAL_MESSAGE: &str = "Can't stop thinking about you 😊";
pub const BLANK_MESSAGE_NOTICE: &str = "Nothing to translate. Give me a message!";

// UI Configuration
pub const UI_REFRESH_INTERVAL_MS: u64 = 50;
pub const UI_RESULT_CHANNEL_CAPACITY: usize = 8;
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// Files
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_PATH: &str = ".crushor/config.toml";
pub const LOG_FILE_NAME: &str = "crushor.log";
pub const ENV_PREFIX: &str = "CRUSHOR_";
