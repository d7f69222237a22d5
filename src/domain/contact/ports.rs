use async_trait::async_trait;

use super::{
    errors::ContactError,
    models::{
        acknowledgement::AcknowledgementPayload,
        message::OutboundMessage,
        receipt::{DeliveryFailure, DeliveryReceipt},
        submission::SubmissionPayload,
    },
};

#[async_trait]
/// Outbound mail capability shared by every request.
pub trait MailTransport: Send + Sync + 'static {
    /// Hands `message` to the relay in a single attempt.
    async fn send(&self, message: OutboundMessage) -> Result<DeliveryReceipt, DeliveryFailure>;

    /// Checks that the relay is reachable and accepts our credentials.
    async fn verify(&self) -> Result<(), DeliveryFailure>;
}

#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    /// Relays a contact form submission to the administrator.
    async fn submit(&self, payload: SubmissionPayload) -> Result<DeliveryReceipt, ContactError>;

    /// Sends a thank-you note back to whoever filled in the form.
    async fn acknowledge(
        &self,
        payload: AcknowledgementPayload,
    ) -> Result<DeliveryReceipt, ContactError>;
}
