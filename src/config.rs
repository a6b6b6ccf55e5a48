use std::{path::PathBuf, time::Duration};

use config::{ConfigError, File};
use secrecy::Secret;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub contact: ContactSettings,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// Directory holding the built single-page site. Nothing is served besides
    /// the API when unset.
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    pub timeout_milliseconds: u64,
    #[serde(default)]
    pub mode: DeliveryMode,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Hand every message to the provider.
    #[default]
    Live,
    /// Log messages instead of sending them.
    DryRun,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSettings {
    /// Where contact form messages are delivered.
    pub recipient_email: String,
    /// Named in the footer of every notification email.
    pub site_owner: String,
}

/// The possible runtime environments of the application.
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

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

/// Reads `configuration/base.yaml`, the file of the environment selected by
/// `APP_ENVIRONMENT`, then `APP_*` variables and the deployment shortcuts
/// `PORT`, `RESEND_API_KEY` and `CONTACT_RECIPIENT`, later sources winning.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        ConfigError::Message(format!("failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    config::Config::builder()
        .add_source(File::from(configuration_directory.join("base.yaml")))
        .add_source(File::from(configuration_directory.join(environment_filename)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("application.port", std::env::var("PORT").ok())?
        .set_override_option(
            "email_client.authorization_token",
            std::env::var("RESEND_API_KEY").ok(),
        )?
        .set_override_option(
            "contact.recipient_email",
            std::env::var("CONTACT_RECIPIENT").ok(),
        )?
        .build()?
        .try_deserialize()
}
