//! Domain model for the mail client.

mod envelope;
mod folder;
mod mailbox;
mod message;

pub use envelope::OutboundEnvelope;
pub use folder::{Folder, ParseFolderError};
pub use mailbox::Mailbox;
pub use message::{MailMessage, ProviderProfile, SendReceipt};
