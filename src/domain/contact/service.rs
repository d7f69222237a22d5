use async_trait::async_trait;
use std::sync::Arc;

use super::{
    errors::ContactError,
    models::{
        acknowledgement::{AcknowledgementPayload, AcknowledgementRequest},
        email::EmailAddress,
        message::OutboundMessage,
        receipt::DeliveryReceipt,
        submission::{Submission, SubmissionPayload},
    },
    ports::{ContactService, MailTransport},
};

pub struct ContactDesk<T>
where
    T: MailTransport,
{
    transport: Arc<T>,
    sender: EmailAddress,
    receiver: EmailAddress,
}

impl<T> ContactDesk<T>
where
    T: MailTransport,
{
    pub fn new(transport: Arc<T>, sender: EmailAddress, receiver: EmailAddress) -> Self {
        Self {
            transport,
            sender,
            receiver,
        }
    }

    async fn dispatch(&self, message: OutboundMessage) -> Result<DeliveryReceipt, ContactError> {
        match self.transport.send(message).await {
            Ok(receipt) => {
                tracing::info!(response = %receipt.response, "Email sent");
                Ok(receipt)
            }
            Err(failure) => {
                tracing::error!(error = %failure, "Error sending email");
                Err(failure.into())
            }
        }
    }
}

#[async_trait]
impl<T> ContactService for ContactDesk<T>
where
    T: MailTransport,
{
    #[tracing::instrument(
        name = "Relaying a contact form submission",
        skip(self, payload),
        fields(contact_email = tracing::field::Empty, contact_name = tracing::field::Empty)
    )]
    async fn submit(&self, payload: SubmissionPayload) -> Result<DeliveryReceipt, ContactError> {
        let submission = Submission::try_from(payload)?;
        tracing::Span::current()
            .record("contact_email", tracing::field::display(&submission.email))
            .record("contact_name", tracing::field::display(&submission.name));

        let message = compose_submission_notice(&self.sender, &self.receiver, &submission);
        self.dispatch(message).await
    }

    #[tracing::instrument(
        name = "Sending a thank-you note",
        skip(self, payload),
        fields(contact_email = tracing::field::Empty, contact_name = tracing::field::Empty)
    )]
    async fn acknowledge(
        &self,
        payload: AcknowledgementPayload,
    ) -> Result<DeliveryReceipt, ContactError> {
        let request = AcknowledgementRequest::try_from(payload)?;
        tracing::Span::current()
            .record("contact_email", tracing::field::display(&request.email))
            .record("contact_name", tracing::field::display(&request.name));

        let message = compose_acknowledgement(&self.sender, request);
        self.dispatch(message).await
    }
}

fn compose_submission_notice(
    sender: &EmailAddress,
    receiver: &EmailAddress,
    submission: &Submission,
) -> OutboundMessage {
    let subject = format!(
        "New message from {} <{}>",
        submission.name, submission.email
    );
    let body = format!(
        "Name: {}\nEmail: {}\n\n{}",
        submission.name,
        submission.email,
        submission.message.as_ref()
    );
    OutboundMessage::new(sender.clone(), receiver.clone(), subject, body)
}

fn compose_acknowledgement(
    sender: &EmailAddress,
    request: AcknowledgementRequest,
) -> OutboundMessage {
    let subject = format!("Thank you for reaching out, {}!", request.name);
    let body = format!(
        "Hi {},\n\n\
        Thank you for getting in touch. Your message has been received \
        and we will get back to you as soon as possible.\n\n\
        Best regards",
        request.name
    );
    OutboundMessage::new(sender.clone(), request.email.into(), subject, body)
}
