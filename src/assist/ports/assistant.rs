//! Text-assistant provider port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for assistant operations.
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Generative text provider contract.
///
/// Implementations take a fully rendered prompt and return plain text;
/// prompt construction stays on this side of the boundary.
#[async_trait]
pub trait TextAssistant: Send + Sync {
    /// Generates text for a rendered prompt.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError`] when the provider is unconfigured,
    /// rejects the request, or cannot be reached.
    async fn generate_text(&self, prompt: &str) -> AssistantResult<String>;
}

/// Errors returned by text-assistant implementations.
#[derive(Debug, Clone, Error)]
pub enum AssistantError {
    /// No provider credentials are configured.
    #[error("assistant credentials are not configured")]
    MissingCredentials,

    /// The provider answered with an application-level failure.
    #[error("assistant request failed: {0}")]
    Provider(String),

    /// The request never produced a provider answer.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssistantError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
