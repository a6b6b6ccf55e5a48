use async_trait::async_trait;
use uuid::Uuid;

use super::{DeliveryError, EmailSender, OutgoingEmail, SentEmail};

/// Stands in for the provider when delivery is switched off. Every message is
/// logged and acknowledged with a synthetic id.
#[derive(Clone, Debug, Default)]
pub struct DryRunEmailSender;

#[async_trait]
impl EmailSender for DryRunEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, DeliveryError> {
        let id = format!("dry-run-{}", Uuid::new_v4());
        tracing::info!(
            %id,
            to = %email.to,
            subject = %email.subject,
            "dry run, email not sent"
        );
        Ok(SentEmail::new(serde_json::json!({ "id": id })))
    }
}
