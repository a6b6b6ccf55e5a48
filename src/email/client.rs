use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use super::{DeliveryError, EmailSender, OutgoingEmail, SentEmail};

/// Talks to a Resend-compatible HTTP API.
#[derive(Clone, Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: String,
    authorization_token: Secret<String>,
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: String,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        })
    }
}

#[async_trait]
impl EmailSender for EmailClient {
    #[tracing::instrument(
        name = "sending email through the provider",
        skip(self, email),
        fields(to = %email.to)
    )]
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, DeliveryError> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: &self.sender,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected { status, body });
        }

        // Any 2xx means the message was accepted, whatever the receipt looks like.
        let receipt = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<serde_json::Value>(&bytes).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "email provider receipt is not JSON");
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            }),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read the email provider receipt");
                serde_json::Value::Null
            }
        };

        Ok(SentEmail::new(receipt))
    }
}
