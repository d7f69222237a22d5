/// Confirmation returned by the mail relay once it has accepted a message.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DeliveryReceipt {
    pub response: String,
    pub accepted: Vec<String>,
}

impl DeliveryReceipt {
    pub fn new(response: impl Into<String>, accepted: Vec<String>) -> Self {
        Self {
            response: response.into(),
            accepted,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct DeliveryFailure(String);

impl DeliveryFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl AsRef<str> for DeliveryFailure {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
