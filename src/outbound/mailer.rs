use crate::domain::contact::{
    models::{message::OutboundMessage, receipt::DeliveryFailure},
    ports::MailTransport,
};
use lettre::message::{header::ContentType, Mailbox};
use lettre::Message;
use std::sync::Arc;

mod smtp;
mod stub;

pub use smtp::SmtpMailer;
pub use stub::StubMailer;

impl TryFrom<OutboundMessage> for Message {
    type Error = DeliveryFailure;

    fn try_from(message: OutboundMessage) -> Result<Self, Self::Error> {
        let from = message
            .from()
            .as_ref()
            .parse::<Mailbox>()
            .map_err(|e| DeliveryFailure::new(format!("Invalid sender address: {e}")))?;
        let to = message
            .to()
            .as_ref()
            .parse::<Mailbox>()
            .map_err(|e| DeliveryFailure::new(format!("Invalid recipient address: {e}")))?;
        Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body().to_string())
            .map_err(|e| DeliveryFailure::new(e.to_string()))
    }
}

fn accepted_recipients(email: &Message) -> Vec<String> {
    email
        .envelope()
        .to()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Probes the relay once and logs the outcome.
///
/// A failed probe does not stop the service from accepting requests.
pub async fn verify_transport<T: MailTransport>(transport: Arc<T>) {
    match transport.verify().await {
        Ok(()) => tracing::info!("Mail server is ready to take messages."),
        Err(error) => tracing::error!(error = %error, "Error connecting to mail server"),
    }
}
