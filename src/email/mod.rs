use async_trait::async_trait;
use serde::Serialize;

mod client;
mod dry_run;

pub use self::client::EmailClient;
pub use self::dry_run::DryRunEmailSender;

/// A message ready to be handed to the provider. The sender address is owned
/// by the [`EmailSender`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// The provider's receipt for an accepted message, passed through as sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SentEmail(serde_json::Value);

impl SentEmail {
    pub fn new(receipt: serde_json::Value) -> Self {
        Self(receipt)
    }

    /// The message id, either at the top level or nested under `data`.
    pub fn id(&self) -> Option<&str> {
        self.0
            .get("id")
            .or_else(|| self.0.pointer("/data/id"))
            .and_then(serde_json::Value::as_str)
    }

    pub fn receipt(&self) -> &serde_json::Value {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("failed to reach the email provider")]
    Transport(#[from] reqwest::Error),
    #[error("the email provider rejected the message with status {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Dispatches a single email. Implementations make exactly one attempt.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, DeliveryError>;
}
