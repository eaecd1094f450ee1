//! Application services for the mail client.

mod mailbox;

pub use mailbox::{MailboxError, MailboxService, SendOutcome};
