use anyhow::Context;
use contact_relay::configuration::{get_configuration, MailTransportKind, Settings};
use contact_relay::domain::contact::ports::MailTransport;
use contact_relay::domain::contact::service::ContactDesk;
use contact_relay::inbound::http::Application;
use contact_relay::outbound::mailer::{verify_transport, SmtpMailer, StubMailer};
use contact_relay::outbound::telemetry::init_logger;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration")?;
    init_logger("contact_relay", &configuration.log_level(), std::io::stdout);

    match configuration.smtp.transport {
        MailTransportKind::Smtp => {
            let mailer =
                SmtpMailer::new(&configuration.smtp).context("Failed to build SMTP transport")?;
            serve(mailer, configuration).await
        }
        MailTransportKind::Stub => serve(StubMailer::new(), configuration).await,
    }
}

async fn serve<T: MailTransport>(mailer: T, configuration: Settings) -> anyhow::Result<()> {
    let sender = configuration
        .smtp
        .sender()
        .context("Invalid sender email address")?;
    let receiver = configuration
        .contact
        .receiver()
        .context("Invalid receiver email address")?;

    let mailer = Arc::new(mailer);
    tokio::spawn(verify_transport(Arc::clone(&mailer)));

    let contact_service = ContactDesk::new(mailer, sender, receiver);
    let application = Application::build(contact_service, configuration.application).await?;
    tracing::info!("Server running on port {}", application.port());

    application.run_until_stopped().await?;
    Ok(())
}
