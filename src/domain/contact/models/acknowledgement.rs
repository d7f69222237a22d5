use super::{email::ContactEmail, field::FieldError, name::ContactName};
use crate::domain::contact::errors::ValidationError;
use serde_json::Value;

/// Body of `POST /api/thankyou` as it arrives on the wire.
#[derive(Debug, Default, serde::Deserialize)]
pub struct AcknowledgementPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

impl AcknowledgementPayload {
    pub fn new(name: &str, email: &str) -> AcknowledgementPayload {
        Self {
            name: Some(Value::from(name)),
            email: Some(Value::from(email)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcknowledgementRequest {
    pub name: ContactName,
    pub email: ContactEmail,
}

impl AcknowledgementRequest {
    pub fn parse(payload: AcknowledgementPayload) -> Result<AcknowledgementRequest, ValidationError> {
        let incomplete = |e: FieldError| {
            tracing::debug!(error = %e, "Rejecting acknowledgement request");
            ValidationError::IncompleteAcknowledgement
        };
        Ok(Self {
            name: ContactName::parse(payload.name).map_err(incomplete)?,
            email: ContactEmail::parse(payload.email).map_err(incomplete)?,
        })
    }
}

impl TryFrom<AcknowledgementPayload> for AcknowledgementRequest {
    type Error = ValidationError;

    fn try_from(payload: AcknowledgementPayload) -> Result<Self, Self::Error> {
        AcknowledgementRequest::parse(payload)
    }
}
