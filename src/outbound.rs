pub mod mailer;
pub mod telemetry;
