//! Mail message records and provider response payloads.

use super::Folder;
use crate::board::domain::{AvatarColor, EmailAddress};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A message as shown in the mail list.
///
/// Boundary data mapped from the provider; the core treats it as a plain
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    /// Provider message id (or a local pending id for provisional sends).
    pub id: String,
    /// Provider thread id, for grouping replies.
    pub thread_id: Option<String>,
    /// The unique `Message-ID` header, when known.
    pub header_message_id: Option<String>,
    /// Sender display name.
    pub sender_name: String,
    /// Sender address.
    pub sender_email: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body or provider snippet.
    pub body: String,
    /// Provider timestamp.
    pub timestamp: DateTime<Utc>,
    /// Whether the message has been opened.
    pub is_read: bool,
    /// Whether the message is starred.
    pub is_starred: bool,
    /// Folder the message lives in.
    pub folder: Folder,
    /// Avatar tint for the sender.
    pub avatar_color: String,
}

impl MailMessage {
    /// Builds the avatar tint for a sender address, falling back to the
    /// default tint for unparseable addresses.
    fn sender_tint(sender_email: &str) -> String {
        EmailAddress::new(sender_email).map_or_else(
            |_| "bg-blue-600".to_owned(),
            |email| AvatarColor::derived_from_email(&email).as_str().to_owned(),
        )
    }

    /// Creates an inbox message from provider fields.
    #[must_use]
    pub fn incoming(
        id: impl Into<String>,
        sender_name: impl Into<String>,
        sender_email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let sender_email = sender_email.into();
        let avatar_color = Self::sender_tint(&sender_email);
        Self {
            id: id.into(),
            thread_id: None,
            header_message_id: None,
            sender_name: sender_name.into(),
            sender_email,
            subject: subject.into(),
            body: body.into(),
            timestamp,
            is_read: false,
            is_starred: false,
            folder: Folder::Inbox,
            avatar_color,
        }
    }

    /// Welcome placeholder shown when a refreshed inbox comes back empty.
    #[must_use]
    pub fn welcome(clock: &impl Clock) -> Self {
        Self {
            id: "welcome".to_owned(),
            thread_id: None,
            header_message_id: None,
            sender_name: "Atelier".to_owned(),
            sender_email: "system@atelier.app".to_owned(),
            subject: "Your account is connected".to_owned(),
            body: "Your mailbox was linked successfully. Real messages will \
                   appear here as they arrive."
                .to_owned(),
            timestamp: clock.utc(),
            is_read: false,
            is_starred: true,
            folder: Folder::Inbox,
            avatar_color: "bg-blue-600".to_owned(),
        }
    }

    /// Visible placeholder for a failed mailbox load.
    ///
    /// Boundary failures other than session expiry are recovered in place
    /// by surfacing the error as an entity instead of crashing the view.
    #[must_use]
    pub fn load_failure(reason: &str, clock: &impl Clock) -> Self {
        Self {
            id: "load-error".to_owned(),
            thread_id: None,
            header_message_id: None,
            sender_name: "Atelier".to_owned(),
            sender_email: "system@atelier.app".to_owned(),
            subject: "Could not load your mail".to_owned(),
            body: format!(
                "Your messages could not be fetched. Check your connection \
                 and the application's permissions.\n\n{reason}"
            ),
            timestamp: clock.utc(),
            is_read: false,
            is_starred: false,
            folder: Folder::Inbox,
            avatar_color: "bg-red-600".to_owned(),
        }
    }
}

/// Provider acknowledgement for an accepted outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    /// Provider-assigned message id.
    pub id: String,
    /// Thread the message was filed under, if any.
    pub thread_id: Option<String>,
}

/// Account profile fetched from the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Hosted avatar image, if any.
    pub avatar_url: Option<String>,
}
