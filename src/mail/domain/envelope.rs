//! Outbound mail envelope.

/// Everything the provider needs to send one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEnvelope {
    recipient: String,
    subject: String,
    body: String,
    thread_id: Option<String>,
    in_reply_to: Option<String>,
}

impl OutboundEnvelope {
    /// Creates an envelope with the required fields.
    #[must_use]
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
            thread_id: None,
            in_reply_to: None,
        }
    }

    /// Marks the envelope as a threaded reply.
    #[must_use]
    pub fn with_reply(
        mut self,
        thread_id: impl Into<String>,
        in_reply_to: impl Into<String>,
    ) -> Self {
        self.thread_id = Some(thread_id.into());
        self.in_reply_to = Some(in_reply_to.into());
        self
    }

    /// Returns the recipient address.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the thread being replied to, if any.
    #[must_use]
    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    /// Returns the `Message-ID` being replied to, if any.
    #[must_use]
    pub fn in_reply_to(&self) -> Option<&str> {
        self.in_reply_to.as_deref()
    }
}
