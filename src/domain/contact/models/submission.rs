use super::{
    email::ContactEmail,
    field::{required, FieldError},
    name::ContactName,
};
use crate::domain::contact::errors::ValidationError;
use serde_json::Value;

/// Body of `POST /api/send` as it arrives on the wire.
#[derive(Debug, Default, serde::Deserialize)]
pub struct SubmissionPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl SubmissionPayload {
    pub fn new(name: &str, email: &str, message: &str) -> SubmissionPayload {
        Self {
            name: Some(Value::from(name)),
            email: Some(Value::from(email)),
            message: Some(Value::from(message)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(value: Option<Value>) -> Result<ContactMessage, FieldError> {
        required("message", value).map(Self)
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessage,
}

impl Submission {
    pub fn parse(payload: SubmissionPayload) -> Result<Submission, ValidationError> {
        let incomplete = |e: FieldError| {
            tracing::debug!(error = %e, "Rejecting contact form submission");
            ValidationError::IncompleteSubmission
        };
        Ok(Self {
            name: ContactName::parse(payload.name).map_err(incomplete)?,
            email: ContactEmail::parse(payload.email).map_err(incomplete)?,
            message: ContactMessage::parse(payload.message).map_err(incomplete)?,
        })
    }
}

impl TryFrom<SubmissionPayload> for Submission {
    type Error = ValidationError;

    fn try_from(payload: SubmissionPayload) -> Result<Self, Self::Error> {
        Submission::parse(payload)
    }
}
