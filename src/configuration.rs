use crate::domain::contact::models::email::{EmailAddress, EmailError};
use config::builder::{ConfigBuilder, DefaultState};
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

/// Deployment variables understood without the `APP_` prefix, with the
/// settings key each one overrides.
const DEPLOYMENT_VARIABLES: [(&str, &str); 8] = [
    ("SMTP_HOST", "smtp.host"),
    ("SMTP_PORT", "smtp.port"),
    ("SMTP_SECURE", "smtp.secure"),
    ("SMTP_USER", "smtp.username"),
    ("SMTP_PASS", "smtp.password"),
    ("RECEIVER_EMAIL", "contact.receiver_email"),
    ("PORT", "application.port"),
    ("MANAGED_LISTENER", "application.managed_listener"),
];

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub general: GeneralSettings,
    pub application: ApplicationSettings,
    pub smtp: SmtpSettings,
    pub contact: ContactSettings,
}

impl Settings {
    pub fn log_level(&self) -> String {
        self.general.log_level.clone()
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct GeneralSettings {
    pub log_level: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    /// The hosting platform owns the listening socket and hands it over to us.
    #[serde(default)]
    pub managed_listener: bool,
}

#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum MailTransportKind {
    Smtp,
    Stub,
}

impl Default for MailTransportKind {
    fn default() -> Self {
        Self::Smtp
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct SmtpSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// Implicit TLS when set, a mandatory STARTTLS upgrade otherwise.
    pub secure: bool,
    pub username: String,
    pub password: Secret<String>,
    pub sender_email: Option<String>,
    #[serde(default)]
    pub transport: MailTransportKind,
}

impl SmtpSettings {
    /// Messages leave from `sender_email`, or from the authenticated account.
    pub fn sender(&self) -> Result<EmailAddress, EmailError> {
        let sender = self
            .sender_email
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(self.username.as_str());
        EmailAddress::parse(sender.to_string())
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct ContactSettings {
    pub receiver_email: String,
}

impl ContactSettings {
    pub fn receiver(&self) -> Result<EmailAddress, EmailError> {
        EmailAddress::parse(self.receiver_email.clone())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let builder = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        );

    with_deployment_variables(builder, |variable| std::env::var(variable).ok())?
        .build()?
        .try_deserialize::<Settings>()
}

/// Blank variables are treated as unset so the file defaults still apply.
fn with_deployment_variables<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, config::ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (variable, key) in DEPLOYMENT_VARIABLES {
        let value = lookup(variable).filter(|v| !v.trim().is_empty());
        builder = builder.set_override_option(key, value)?;
    }
    Ok(builder)
}

/// The possible runtime environment for our application.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
