//! Mail provider gateway port.

use crate::mail::domain::{MailMessage, OutboundEnvelope, ProviderProfile, SendReceipt};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type MailGatewayResult<T> = Result<T, MailGatewayError>;

/// Webmail provider contract.
///
/// Consumed, never reimplemented: the core only maps folders to query
/// strings and applies the results back into session state.
#[async_trait]
pub trait MailGateway: Send + Sync {
    /// Lists messages matching a provider query string.
    ///
    /// # Errors
    ///
    /// Returns [`MailGatewayError::AuthExpired`] when the provider session
    /// is no longer valid, or another variant for provider and transport
    /// failures.
    async fn list_messages(&self, query: &str, limit: usize)
    -> MailGatewayResult<Vec<MailMessage>>;

    /// Sends one message and returns the provider receipt.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`MailGateway::list_messages`].
    async fn send_message(&self, envelope: &OutboundEnvelope) -> MailGatewayResult<SendReceipt>;

    /// Fetches the signed-in account profile.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`MailGateway::list_messages`].
    async fn fetch_profile(&self) -> MailGatewayResult<ProviderProfile>;
}

/// Errors returned by mail gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum MailGatewayError {
    /// The provider rejected the credentials; the session must be
    /// terminated and the user redirected to re-authenticate.
    #[error("provider session expired")]
    AuthExpired,

    /// The provider answered with an application-level failure.
    #[error("provider request failed: {0}")]
    Provider(String),

    /// The request never produced a provider answer.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl MailGatewayError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns whether the error means the provider session expired.
    #[must_use]
    pub const fn is_auth_expiry(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }
}
