// Gateway module for the controller - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod interaction;

// Public re-exports - the ONLY way to access controller functionality
pub use interaction::{Controller, PendingTranslation};
