// Gateway module for the translator - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod backend;
mod client;
mod credential;
mod prompt;
mod types;

// Public re-exports - the ONLY way to access translator functionality
pub use backend::{CohereBackend, GenerationBackend};
pub use client::TranslationClient;
pub use credential::Credential;
pub use prompt::build_prompt;
pub use types::{GenerateRequest, GenerateResponse, Generation, TranslationRequest, TranslationResult};

#[cfg(test)]
pub(crate) use backend::MockGenerationBackend;
