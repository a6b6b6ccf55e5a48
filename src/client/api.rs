use reqwest::Client;

use super::ContactFields;
use crate::app::SEND_EMAIL_PATH;

/// Posts contact forms to a running site.
#[derive(Clone, Debug)]
pub struct ContactApi {
    http_client: Client,
    endpoint: String,
}

impl ContactApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SEND_EMAIL_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[tracing::instrument(name = "posting the contact form", skip(self, fields))]
    pub async fn send(&self, fields: &ContactFields) -> reqwest::Result<reqwest::Response> {
        self.http_client
            .post(&self.endpoint)
            .json(fields)
            .send()
            .await
    }
}
