use super::accepted_recipients;
use crate::domain::contact::{
    models::{
        message::OutboundMessage,
        receipt::{DeliveryFailure, DeliveryReceipt},
    },
    ports::MailTransport,
};
use async_trait::async_trait;
use lettre::transport::stub::AsyncStubTransport;
use lettre::{AsyncTransport, Message};

/// Accepts every message without touching the network and logs it.
///
/// Meant for local development where no relay is at hand.
pub struct StubMailer {
    transport: AsyncStubTransport,
}

impl StubMailer {
    /// A stub that accepts every message.
    pub fn new() -> Self {
        Self {
            transport: AsyncStubTransport::new_ok(),
        }
    }

    /// A stub that rejects every message.
    pub fn new_error() -> Self {
        Self {
            transport: AsyncStubTransport::new_error(),
        }
    }
}

impl Default for StubMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for StubMailer {
    async fn send(&self, message: OutboundMessage) -> Result<DeliveryReceipt, DeliveryFailure> {
        tracing::info!(
            from = %message.from(),
            to = %message.to(),
            subject = %message.subject(),
            "Stub transport received an email"
        );
        let email = Message::try_from(message)?;
        let accepted = accepted_recipients(&email);
        self.transport
            .send(email)
            .await
            .map_err(|e| DeliveryFailure::new(e.to_string()))?;

        Ok(DeliveryReceipt::new("250 Message accepted by stub transport", accepted))
    }

    async fn verify(&self) -> Result<(), DeliveryFailure> {
        Ok(())
    }
}
