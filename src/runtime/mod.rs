/// Runtime orchestrator module - Gateway

mod orchestrator;
mod non_interactive;

pub use orchestrator::Orchestrator;
pub use non_interactive::{NonInteractiveRunner, NonInteractiveResult};
