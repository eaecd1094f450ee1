//! Canned assistant for drafting tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::assist::ports::{AssistantError, AssistantResult, TextAssistant};

/// Thread-safe assistant stub returning a fixed reply.
///
/// Records every prompt it receives so tests can assert on the rendered
/// prompt text.
#[derive(Debug, Clone)]
pub struct CannedAssistant {
    state: Arc<RwLock<CannedAssistantState>>,
}

#[derive(Debug)]
struct CannedAssistantState {
    reply: String,
    fail_next: Option<AssistantError>,
    prompts: Vec<String>,
}

impl Default for CannedAssistant {
    fn default() -> Self {
        Self::with_reply("Sounds good.")
    }
}

impl CannedAssistant {
    /// Creates an assistant that answers every prompt with `reply`.
    #[must_use]
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(CannedAssistantState {
                reply: reply.into(),
                fail_next: None,
                prompts: Vec::new(),
            })),
        }
    }

    /// Makes the next call fail with `error`.
    pub fn fail_next(&self, error: AssistantError) {
        if let Ok(mut state) = self.state.write() {
            state.fail_next = Some(error);
        }
    }

    /// Returns the prompts received so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.state
            .read()
            .map(|state| state.prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextAssistant for CannedAssistant {
    async fn generate_text(&self, prompt: &str) -> AssistantResult<String> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AssistantError::transport(std::io::Error::other(err.to_string())))?;
        state.prompts.push(prompt.to_owned());
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }
        Ok(state.reply.clone())
    }
}
