//! Service layer for mailbox refresh and the two-phase send protocol.

use crate::mail::{
    domain::{Folder, MailMessage, Mailbox, OutboundEnvelope, ProviderProfile, SendReceipt},
    ports::MailGateway,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Service-level errors for mailbox operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MailboxError {
    /// The provider session expired. The caller must force-terminate the
    /// workspace session and redirect the user to re-authenticate.
    #[error("provider session expired; re-authentication required")]
    SessionExpired,

    /// The provider refused an outbound message; the provisional copy was
    /// rolled back.
    #[error("message send failed: {0}")]
    SendFailed(String),

    /// The account profile could not be fetched.
    #[error("profile fetch failed: {0}")]
    ProfileUnavailable(String),
}

/// How a completed send was reconciled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The provisional message now carries the provider id and thread.
    Confirmed(SendReceipt),
    /// The provisional message was deleted while the call was in flight;
    /// the provider response was discarded without mutating anything.
    DiscardedStale,
}

/// Mailbox orchestration service.
///
/// Stateless over the gateway: every operation takes the session-owned
/// [`Mailbox`] explicitly and re-validates its assumptions after each
/// await instead of trusting pre-wait state.
#[derive(Clone)]
pub struct MailboxService<G, C>
where
    G: MailGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> MailboxService<G, C>
where
    G: MailGateway,
    C: Clock + Send + Sync,
{
    /// Creates a new mailbox service.
    #[must_use]
    pub const fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self { gateway, clock }
    }

    /// Refreshes one folder from the provider.
    ///
    /// Lists messages with the folder's fixed query string and replaces the
    /// folder's contents. An empty refreshed inbox receives a welcome
    /// placeholder; a non-auth gateway failure is recovered in place by
    /// inserting a visible load-failure placeholder. Returns the number of
    /// fetched messages.
    ///
    /// # Errors
    ///
    /// Returns [`MailboxError::SessionExpired`] when the provider reports
    /// expired credentials; the mailbox is left unchanged in that case.
    pub async fn refresh(
        &self,
        mailbox: &mut Mailbox,
        folder: Folder,
        limit: usize,
    ) -> Result<usize, MailboxError> {
        match self.gateway.list_messages(folder.provider_query(), limit).await {
            Ok(mut fetched) => {
                for message in &mut fetched {
                    message.folder = folder;
                }
                let count = fetched.len();
                mailbox.replace_folder(folder, fetched);
                if count == 0 && folder == Folder::Inbox {
                    mailbox.insert(MailMessage::welcome(&*self.clock));
                }
                Ok(count)
            }
            Err(err) if err.is_auth_expiry() => Err(MailboxError::SessionExpired),
            Err(err) => {
                mailbox.insert(MailMessage::load_failure(&err.to_string(), &*self.clock));
                Ok(0)
            }
        }
    }

    /// Phase one of an optimistic send: applies a provisional Sent entity
    /// locally and tags it as in flight. Returns the provisional id.
    pub fn begin_send(
        &self,
        mailbox: &mut Mailbox,
        envelope: &OutboundEnvelope,
        sender_name: &str,
        sender_email: &str,
    ) -> String {
        let provisional_id = format!("pending-{}", Uuid::new_v4());
        let provisional = MailMessage {
            id: provisional_id.clone(),
            thread_id: envelope.thread_id().map(str::to_owned),
            header_message_id: None,
            sender_name: sender_name.to_owned(),
            sender_email: sender_email.to_owned(),
            subject: envelope.subject().to_owned(),
            body: envelope.body().to_owned(),
            timestamp: self.clock.utc(),
            is_read: true,
            is_starred: false,
            folder: Folder::Sent,
            avatar_color: "bg-gray-500".to_owned(),
        };
        mailbox.insert(provisional);
        mailbox.begin_pending(provisional_id.clone());
        provisional_id
    }

    /// Phase two: performs the gateway call and reconciles the provisional
    /// entity.
    ///
    /// A confirmed send replaces the provisional id with the provider's
    /// receipt; a failed send rolls the provisional back. Staleness is
    /// re-checked both before and after the await: when the provisional
    /// was deleted in the meantime the resolution is discarded without
    /// touching the mailbox.
    ///
    /// # Errors
    ///
    /// Returns [`MailboxError::SessionExpired`] for expired credentials or
    /// [`MailboxError::SendFailed`] for other gateway failures; in both
    /// cases the provisional entity has been rolled back.
    pub async fn complete_send(
        &self,
        mailbox: &mut Mailbox,
        provisional_id: &str,
        envelope: &OutboundEnvelope,
    ) -> Result<SendOutcome, MailboxError> {
        if !mailbox.is_pending(provisional_id) {
            return Ok(SendOutcome::DiscardedStale);
        }
        match self.gateway.send_message(envelope).await {
            Ok(receipt) => {
                if mailbox.confirm_send(provisional_id, &receipt) {
                    Ok(SendOutcome::Confirmed(receipt))
                } else {
                    Ok(SendOutcome::DiscardedStale)
                }
            }
            Err(err) if err.is_auth_expiry() => {
                mailbox.rollback_send(provisional_id);
                Err(MailboxError::SessionExpired)
            }
            Err(err) => {
                mailbox.rollback_send(provisional_id);
                Err(MailboxError::SendFailed(err.to_string()))
            }
        }
    }

    /// Sends one message through both phases.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`MailboxService::complete_send`].
    pub async fn send(
        &self,
        mailbox: &mut Mailbox,
        envelope: &OutboundEnvelope,
        sender_name: &str,
        sender_email: &str,
    ) -> Result<SendOutcome, MailboxError> {
        let provisional_id = self.begin_send(mailbox, envelope, sender_name, sender_email);
        self.complete_send(mailbox, &provisional_id, envelope).await
    }

    /// Fetches the signed-in account profile.
    ///
    /// # Errors
    ///
    /// Returns [`MailboxError::SessionExpired`] for expired credentials or
    /// [`MailboxError::ProfileUnavailable`] for other gateway failures.
    pub async fn load_profile(&self) -> Result<ProviderProfile, MailboxError> {
        self.gateway.fetch_profile().await.map_err(|err| {
            if err.is_auth_expiry() {
                MailboxError::SessionExpired
            } else {
                MailboxError::ProfileUnavailable(err.to_string())
            }
        })
    }
}
