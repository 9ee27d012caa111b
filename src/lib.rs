pub mod app;
pub mod cli;
pub mod constants;
pub mod controller;
pub mod modes;
pub mod runtime;
pub mod translator;
pub mod tui;
pub mod utils;

pub use app::{load_config, Config};
pub use controller::Controller;
pub use modes::TranslationMode;
pub use translator::{CohereBackend, Credential, GenerationBackend, TranslationClient};
pub use tui::run_ui;
pub use utils::CrushorError;
