//! Ports for the assistance boundary.

mod assistant;

pub use assistant::{AssistantError, AssistantResult, TextAssistant};
