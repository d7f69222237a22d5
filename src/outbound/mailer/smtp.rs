use super::accepted_recipients;
use crate::configuration::SmtpSettings;
use crate::domain::contact::{
    models::{
        message::OutboundMessage,
        receipt::{DeliveryFailure, DeliveryReceipt},
    },
    ports::MailTransport,
};
use async_trait::async_trait;
use lettre::transport::smtp::{authentication::Credentials, response::Response};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

/// Sends mail through an authenticated SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(configuration: &SmtpSettings) -> Result<Self, lettre::transport::smtp::Error> {
        let builder = if configuration.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&configuration.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&configuration.host)?
        };
        let credentials = Credentials::new(
            configuration.username.clone(),
            configuration.password.expose_secret().clone(),
        );
        let transport = builder
            .port(configuration.port)
            .credentials(credentials)
            .build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    #[tracing::instrument(
        name = "Sending email through the SMTP relay",
        skip(self, message),
        fields(recipient = %message.to())
    )]
    async fn send(&self, message: OutboundMessage) -> Result<DeliveryReceipt, DeliveryFailure> {
        let email = Message::try_from(message)?;
        let accepted = accepted_recipients(&email);
        let response = self
            .transport
            .send(email)
            .await
            .map_err(|e| DeliveryFailure::new(e.to_string()))?;

        Ok(DeliveryReceipt::new(describe(&response), accepted))
    }

    async fn verify(&self) -> Result<(), DeliveryFailure> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(DeliveryFailure::new(
                "Mail server refused the test connection",
            )),
            Err(e) => Err(DeliveryFailure::new(e.to_string())),
        }
    }
}

fn describe(response: &Response) -> String {
    let lines: Vec<&str> = response.message().collect();
    format!("{} {}", response.code(), lines.join(" "))
}
