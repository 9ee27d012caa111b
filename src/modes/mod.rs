// Gateway module for modes - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod mode;

// Public re-exports - the ONLY way to access mode functionality
pub use mode::TranslationMode;
