//! Session-owned mailbox state.

use super::{Folder, MailMessage, SendReceipt};
use std::cmp::Reverse;
use std::collections::HashSet;

/// The message list owned by one session, plus the pending-send tags used
/// to gate in-flight provider responses.
///
/// Each in-flight send is tagged with the provisional entity id it targets;
/// a resolution whose tag is gone (the entity was deleted while the call
/// was in flight) must be discarded without mutating anything.
#[derive(Debug, Clone, Default)]
pub struct Mailbox {
    messages: Vec<MailMessage>,
    pending_sends: HashSet<String>,
}

impl Mailbox {
    /// Creates an empty mailbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every message, unordered.
    #[must_use]
    pub fn messages(&self) -> &[MailMessage] {
        &self.messages
    }

    /// Looks up a message by id.
    #[must_use]
    pub fn message(&self, id: &str) -> Option<&MailMessage> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// Inserts a message at the top of the list.
    pub fn insert(&mut self, message: MailMessage) {
        self.messages.insert(0, message);
    }

    /// Replaces the contents of one folder with freshly fetched messages,
    /// leaving other folders untouched.
    pub fn replace_folder(&mut self, folder: Folder, fetched: Vec<MailMessage>) {
        self.messages.retain(|message| message.folder != folder);
        self.messages.extend(fetched);
    }

    /// Flips the star flag. Returns false for unknown ids.
    pub fn toggle_star(&mut self, id: &str) -> bool {
        self.message_mut(id).is_some_and(|message| {
            message.is_starred = !message.is_starred;
            true
        })
    }

    /// Marks a message as read. Returns false for unknown ids.
    pub fn mark_read(&mut self, id: &str) -> bool {
        self.message_mut(id).is_some_and(|message| {
            message.is_read = true;
            true
        })
    }

    /// Moves a message to the trash folder. Returns false for unknown ids.
    ///
    /// Trashing a provisional send counts as deletion for gating purposes:
    /// its pending tag is dropped so a late provider response is discarded.
    pub fn move_to_trash(&mut self, id: &str) -> bool {
        let moved = self.message_mut(id).is_some_and(|message| {
            message.folder = Folder::Trash;
            true
        });
        if moved {
            self.pending_sends.remove(id);
        }
        moved
    }

    /// Removes a message entirely, dropping any pending tag for it.
    pub fn remove(&mut self, id: &str) -> Option<MailMessage> {
        self.pending_sends.remove(id);
        let position = self.messages.iter().position(|message| message.id == id)?;
        Some(self.messages.remove(position))
    }

    /// Returns the messages visible in `folder`, filtered by `search` and
    /// ordered newest first.
    ///
    /// The starred folder selects by flag across all folders; the search
    /// term matches subject, sender name, and body case-insensitively.
    #[must_use]
    pub fn visible(&self, folder: Folder, search: &str) -> Vec<&MailMessage> {
        let needle = search.trim().to_lowercase();
        let mut selected: Vec<&MailMessage> = self
            .messages
            .iter()
            .filter(|message| match folder {
                Folder::Starred => message.is_starred,
                _ => message.folder == folder,
            })
            .filter(|message| {
                needle.is_empty()
                    || message.subject.to_lowercase().contains(&needle)
                    || message.sender_name.to_lowercase().contains(&needle)
                    || message.body.to_lowercase().contains(&needle)
            })
            .collect();
        selected.sort_by_key(|message| Reverse(message.timestamp));
        selected
    }

    /// Returns the number of unread inbox messages.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|message| message.folder == Folder::Inbox && !message.is_read)
            .count()
    }

    /// Tags a provisional send as in flight.
    pub fn begin_pending(&mut self, provisional_id: impl Into<String>) {
        self.pending_sends.insert(provisional_id.into());
    }

    /// Returns whether a provisional send is still awaiting its response.
    #[must_use]
    pub fn is_pending(&self, provisional_id: &str) -> bool {
        self.pending_sends.contains(provisional_id)
    }

    /// Reconciles a confirmed send: the provisional message takes the
    /// provider-assigned id and thread. Returns false when the provisional
    /// entity no longer exists.
    pub fn confirm_send(&mut self, provisional_id: &str, receipt: &SendReceipt) -> bool {
        self.pending_sends.remove(provisional_id);
        self.message_mut(provisional_id).is_some_and(|message| {
            message.id.clone_from(&receipt.id);
            message.thread_id.clone_from(&receipt.thread_id);
            true
        })
    }

    /// Rolls back a failed send by removing the provisional message.
    pub fn rollback_send(&mut self, provisional_id: &str) -> Option<MailMessage> {
        self.remove(provisional_id)
    }

    fn message_mut(&mut self, id: &str) -> Option<&mut MailMessage> {
        self.messages.iter_mut().find(|message| message.id == id)
    }
}
