//! `minijinja` prompt templates for the assistant.

use minijinja::{Environment, context};
use thiserror::Error;

const TASK_DESCRIPTION_TEMPLATE: &str = "\
Write a concise, professional task description for a corporate task \
management board.
Task title: \"{{ title }}\"
Department: {{ department }}
Keep it under 50 words and action-oriented. Return only the description \
text.";

const DRAFT_EMAIL_TEMPLATE: &str = "\
Write a professional email based on this request: \"{{ request }}\".
{% if reply_context %}It is a reply to the following message:
---
{{ reply_context }}
---
{% endif %}Keep it polite and concise. Return only the email body text, \
without a subject line.";

const SUMMARIZE_EMAIL_TEMPLATE: &str = "\
Summarise the following email in two sentences or fewer, keeping any \
action items:
---
{{ body }}
---";

/// Prompt rendering failure.
#[derive(Debug, Error)]
#[error("prompt render failed: {0}")]
pub struct PromptError(#[from] minijinja::Error);

/// Renders the fixed prompts the application sends to the assistant.
#[derive(Debug, Default)]
pub struct PromptLibrary {
    environment: Environment<'static>,
}

impl PromptLibrary {
    /// Creates the library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the task-description prompt.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] when rendering fails.
    pub fn task_description(&self, title: &str, department: &str) -> Result<String, PromptError> {
        let rendered = self
            .environment
            .render_str(TASK_DESCRIPTION_TEMPLATE, context! { title, department })?;
        Ok(rendered)
    }

    /// Renders the email-draft prompt, optionally quoting the message
    /// being replied to.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] when rendering fails.
    pub fn draft_email(
        &self,
        request: &str,
        reply_context: Option<&str>,
    ) -> Result<String, PromptError> {
        let rendered = self
            .environment
            .render_str(DRAFT_EMAIL_TEMPLATE, context! { request, reply_context })?;
        Ok(rendered)
    }

    /// Renders the email-summary prompt.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] when rendering fails.
    pub fn summarize_email(&self, body: &str) -> Result<String, PromptError> {
        let rendered = self
            .environment
            .render_str(SUMMARIZE_EMAIL_TEMPLATE, context! { body })?;
        Ok(rendered)
    }
}
