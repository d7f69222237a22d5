use super::email::EmailAddress;

/// A plain-text email ready to be handed to a mail transport.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    from: EmailAddress,
    to: EmailAddress,
    subject: String,
    body: String,
}

impl OutboundMessage {
    pub fn new(from: EmailAddress, to: EmailAddress, subject: String, body: String) -> Self {
        Self {
            from,
            to,
            subject,
            body,
        }
    }

    pub fn from(&self) -> &EmailAddress {
        &self.from
    }

    pub fn to(&self) -> &EmailAddress {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
