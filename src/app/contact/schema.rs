use serde::{Deserialize, Serialize};

use crate::{
    domain::contact::{ContactSubmission, MissingField},
    email::SentEmail,
};

/// Absent and `null` fields deserialize to `None`; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SendEmailBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl TryFrom<SendEmailBody> for ContactSubmission {
    type Error = MissingField;

    fn try_from(value: SendEmailBody) -> Result<Self, Self::Error> {
        ContactSubmission::parse(value.name, value.email, value.message)
    }
}

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub data: SentEmail,
}
