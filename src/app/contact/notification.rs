use askama::Template;
use chrono::Datelike;

use crate::{config::ContactSettings, domain::contact::ContactSubmission, email::OutgoingEmail};

pub const SUBJECT: &str = "New Contact Form Message";

#[derive(Template)]
#[template(path = "contact_notification.html")]
struct ContactNotificationTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message_lines: Vec<&'a str>,
    site_owner: &'a str,
    year: i32,
}

/// Renders the email the site owner receives for a submission.
pub fn render(
    submission: &ContactSubmission,
    settings: &ContactSettings,
) -> askama::Result<OutgoingEmail> {
    let html = ContactNotificationTemplate {
        name: submission.name.as_ref(),
        email: submission.email.as_ref(),
        message_lines: submission.message_lines().collect(),
        site_owner: &settings.site_owner,
        year: chrono::Utc::now().year(),
    }
    .render()?;

    Ok(OutgoingEmail {
        to: settings.recipient_email.clone(),
        subject: SUBJECT.to_owned(),
        html,
    })
}
