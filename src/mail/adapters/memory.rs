//! In-memory mail gateway for mailbox tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::mail::{
    domain::{MailMessage, OutboundEnvelope, ProviderProfile, SendReceipt},
    ports::{MailGateway, MailGatewayError, MailGatewayResult},
};

/// Thread-safe in-memory mail gateway.
#[derive(Debug, Clone)]
pub struct InMemoryMailGateway {
    state: Arc<RwLock<InMemoryGatewayState>>,
}

#[derive(Debug)]
struct InMemoryGatewayState {
    messages_by_query: HashMap<String, Vec<MailMessage>>,
    sent: Vec<OutboundEnvelope>,
    fail_next: Option<MailGatewayError>,
    profile: ProviderProfile,
    next_receipt: u64,
}

impl Default for InMemoryMailGateway {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryGatewayState {
                messages_by_query: HashMap::new(),
                sent: Vec::new(),
                fail_next: None,
                profile: ProviderProfile {
                    name: "Test Account".to_owned(),
                    email: "account@example.com".to_owned(),
                    avatar_url: None,
                },
                next_receipt: 1,
            })),
        }
    }
}

impl InMemoryMailGateway {
    /// Creates an empty in-memory gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the messages returned for a query string.
    pub fn seed_messages(&self, query: impl Into<String>, messages: Vec<MailMessage>) {
        if let Ok(mut state) = self.state.write() {
            state.messages_by_query.insert(query.into(), messages);
        }
    }

    /// Makes the next gateway call fail with `error`.
    pub fn fail_next(&self, error: MailGatewayError) {
        if let Ok(mut state) = self.state.write() {
            state.fail_next = Some(error);
        }
    }

    /// Returns the envelopes accepted so far.
    #[must_use]
    pub fn sent(&self) -> Vec<OutboundEnvelope> {
        self.state
            .read()
            .map(|state| state.sent.clone())
            .unwrap_or_default()
    }

    fn take_failure(state: &mut InMemoryGatewayState) -> Option<MailGatewayError> {
        state.fail_next.take()
    }
}

#[async_trait]
impl MailGateway for InMemoryMailGateway {
    async fn list_messages(
        &self,
        query: &str,
        limit: usize,
    ) -> MailGatewayResult<Vec<MailMessage>> {
        let mut state = self.state.write().map_err(|err| {
            MailGatewayError::transport(std::io::Error::other(err.to_string()))
        })?;
        if let Some(error) = Self::take_failure(&mut state) {
            return Err(error);
        }
        let messages = state.messages_by_query.get(query).cloned().unwrap_or_default();
        Ok(messages.into_iter().take(limit).collect())
    }

    async fn send_message(&self, envelope: &OutboundEnvelope) -> MailGatewayResult<SendReceipt> {
        let mut state = self.state.write().map_err(|err| {
            MailGatewayError::transport(std::io::Error::other(err.to_string()))
        })?;
        if let Some(error) = Self::take_failure(&mut state) {
            return Err(error);
        }
        let receipt_number = state.next_receipt;
        state.next_receipt += 1;
        state.sent.push(envelope.clone());
        Ok(SendReceipt {
            id: format!("msg-{receipt_number}"),
            thread_id: envelope.thread_id().map(str::to_owned),
        })
    }

    async fn fetch_profile(&self) -> MailGatewayResult<ProviderProfile> {
        let mut state = self.state.write().map_err(|err| {
            MailGatewayError::transport(std::io::Error::other(err.to_string()))
        })?;
        if let Some(error) = Self::take_failure(&mut state) {
            return Err(error);
        }
        Ok(state.profile.clone())
    }
}
