use super::field::{required, FieldError};
use serde_json::Value;

/// Address supplied by whoever filled in the contact form.
///
/// Any non-empty text is accepted: the relay is the only judge of whether it
/// can actually be delivered to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(value: Option<Value>) -> Result<ContactEmail, FieldError> {
        required("email", value).map(Self)
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EmailError {
    #[error("Email address cannot be empty.")]
    EmptyAddress,
}

/// Sender or recipient of an outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<EmailAddress, EmailError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmailError::EmptyAddress);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        EmailAddress::parse(value.to_string())
    }
}

impl From<ContactEmail> for EmailAddress {
    fn from(email: ContactEmail) -> Self {
        Self(email.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
