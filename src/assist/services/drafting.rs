//! Drafting service composing the prompt library and the assistant port.

use std::sync::Arc;
use thiserror::Error;

use crate::assist::{
    domain::{PromptError, PromptLibrary},
    ports::{AssistantError, TextAssistant},
};

/// Errors surfaced by drafting operations.
#[derive(Debug, Error)]
pub enum DraftingError {
    /// A prompt template failed to render.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The assistant failed to answer.
    #[error(transparent)]
    Assistant(#[from] AssistantError),
}

/// Generates suggested text for tasks and mail.
#[derive(Clone)]
pub struct DraftingService<A>
where
    A: TextAssistant,
{
    assistant: Arc<A>,
    prompts: Arc<PromptLibrary>,
}

impl<A> DraftingService<A>
where
    A: TextAssistant,
{
    /// Creates a new drafting service.
    #[must_use]
    pub fn new(assistant: Arc<A>) -> Self {
        Self {
            assistant,
            prompts: Arc::new(PromptLibrary::new()),
        }
    }

    /// Suggests a description for a task being created.
    ///
    /// # Errors
    ///
    /// Returns [`DraftingError`] when the prompt cannot be rendered or
    /// the assistant fails.
    pub async fn suggest_task_description(
        &self,
        title: &str,
        department: &str,
    ) -> Result<String, DraftingError> {
        let prompt = self.prompts.task_description(title, department)?;
        Ok(self.assistant.generate_text(&prompt).await?)
    }

    /// Drafts an email body from a short request, optionally quoting the
    /// message being replied to.
    ///
    /// # Errors
    ///
    /// Returns [`DraftingError`] when the prompt cannot be rendered or
    /// the assistant fails.
    pub async fn draft_email(
        &self,
        request: &str,
        reply_context: Option<&str>,
    ) -> Result<String, DraftingError> {
        let prompt = self.prompts.draft_email(request, reply_context)?;
        Ok(self.assistant.generate_text(&prompt).await?)
    }

    /// Summarises an email body.
    ///
    /// # Errors
    ///
    /// Returns [`DraftingError`] when the prompt cannot be rendered or
    /// the assistant fails.
    pub async fn summarize_email(&self, body: &str) -> Result<String, DraftingError> {
        let prompt = self.prompts.summarize_email(body)?;
        Ok(self.assistant.generate_text(&prompt).await?)
    }
}
