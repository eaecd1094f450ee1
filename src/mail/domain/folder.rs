//! Logical mail folders and their provider query mapping.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned while parsing folders from the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown folder: {0}")]
pub struct ParseFolderError(pub String);

/// Logical folder shown in the mail sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Folder {
    /// Primary incoming mail.
    Inbox,
    /// Messages flagged with a star.
    Starred,
    /// Messages snoozed for later.
    Snoozed,
    /// Sent mail.
    Sent,
    /// Unsent drafts.
    Drafts,
    /// Purchase receipts and orders.
    Purchases,
    /// Provider-flagged important mail.
    Important,
    /// Scheduled sends.
    Scheduled,
    /// Everything, regardless of label.
    AllMail,
    /// Detected spam.
    Spam,
    /// Deleted mail.
    Trash,
}

impl Folder {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Starred => "starred",
            Self::Snoozed => "snoozed",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Purchases => "purchases",
            Self::Important => "important",
            Self::Scheduled => "scheduled",
            Self::AllMail => "all_mail",
            Self::Spam => "spam",
            Self::Trash => "trash",
        }
    }

    /// Returns the provider query string for this folder.
    ///
    /// The mapping is fixed: exactly one query per folder, and folders
    /// without a dedicated provider label fall back to the inbox query.
    #[must_use]
    pub const fn provider_query(self) -> &'static str {
        match self {
            Self::Starred => "label:STARRED",
            Self::Snoozed => "in:snoozed",
            Self::Purchases => "category:purchases",
            Self::AllMail => "in:all",
            Self::Inbox
            | Self::Sent
            | Self::Drafts
            | Self::Important
            | Self::Scheduled
            | Self::Spam
            | Self::Trash => "label:INBOX",
        }
    }
}

impl TryFrom<&str> for Folder {
    type Error = ParseFolderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "inbox" => Ok(Self::Inbox),
            "starred" => Ok(Self::Starred),
            "snoozed" => Ok(Self::Snoozed),
            "sent" => Ok(Self::Sent),
            "drafts" => Ok(Self::Drafts),
            "purchases" => Ok(Self::Purchases),
            "important" => Ok(Self::Important),
            "scheduled" => Ok(Self::Scheduled),
            "all_mail" => Ok(Self::AllMail),
            "spam" => Ok(Self::Spam),
            "trash" => Ok(Self::Trash),
            _ => Err(ParseFolderError(value.to_owned())),
        }
    }
}
