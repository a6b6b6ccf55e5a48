use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::instrument;

use super::{notification, schema};
use crate::{
    app::{
        error::{AppError, AppResult},
        AppState,
    },
    domain::contact::ContactSubmission,
};

const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Validates a contact form submission and forwards it to the site owner.
///
/// A body that fails to parse as JSON carries no fields and is rejected like
/// any other incomplete submission.
#[instrument(
    name = "sending a contact form message",
    skip(state, body),
    fields(name = tracing::field::Empty, email = tracing::field::Empty)
)]
pub async fn send_email(
    State(state): State<AppState>,
    body: Result<Json<schema::SendEmailBody>, JsonRejection>,
) -> AppResult<Json<schema::SendEmailResponse>> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(e) => {
            tracing::debug!(detail = %e, "contact form body is not valid JSON");
            schema::SendEmailBody::default()
        }
    };

    let submission = ContactSubmission::try_from(body).map_err(|e| {
        tracing::debug!(detail = %e, "rejecting incomplete contact form");
        AppError::ValidationError(ALL_FIELDS_REQUIRED.to_owned())
    })?;

    let span = tracing::Span::current();
    span.record("name", tracing::field::display(&submission.name));
    span.record("email", tracing::field::display(&submission.email));

    let email = notification::render(&submission, &state.contact)
        .context("Failed to render the contact notification.")?;

    let sent = state
        .email_sender
        .send(&email)
        .await
        .context("Failed to send the contact notification.")?;

    tracing::info!(id = ?sent.id(), "contact notification sent");

    Ok(Json(schema::SendEmailResponse {
        success: true,
        data: sent,
    }))
}
