//! Prompt construction for the text assistant.

mod prompts;

pub use prompts::{PromptError, PromptLibrary};
