use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serde::Serialize;

use super::{ContactApi, Notification, Notifier};

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Whether a submission is in flight. Clones observe the same flag, so a view
/// can keep its submit control disabled while [`ContactForm::submit`] runs.
#[derive(Debug, Clone, Default)]
pub struct SubmittingFlag(Arc<AtomicBool>);

impl SubmittingFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn raise(&self) -> SubmittingGuard {
        self.0.store(true, Ordering::Release);
        SubmittingGuard(Arc::clone(&self.0))
    }
}

/// Lowers the flag when the submission settles or its future is dropped.
struct SubmittingGuard(Arc<AtomicBool>);

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// State behind the contact section of the site.
#[derive(Debug)]
pub struct ContactForm {
    api: ContactApi,
    fields: ContactFields,
    submitting: SubmittingFlag,
    notifier: Notifier,
}

impl ContactForm {
    pub fn new(api: ContactApi) -> Self {
        Self {
            api,
            fields: ContactFields::default(),
            submitting: SubmittingFlag::default(),
            notifier: Notifier::default(),
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_set()
    }

    pub fn submitting_flag(&self) -> SubmittingFlag {
        self.submitting.clone()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifier.current()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifier.dismiss();
    }

    /// Sends the current fields once and reports the outcome.
    ///
    /// The fields are cleared only when the server accepted the message.
    pub async fn submit(&mut self) {
        let _submitting = self.submitting.raise();

        let outcome = self.api.send(&self.fields).await;
        let notification = match outcome {
            Ok(response) if response.status().is_success() => {
                self.fields = ContactFields::default();
                Notification::success(SENT_MESSAGE)
            }
            Ok(response) => {
                tracing::warn!(
                    endpoint = self.api.endpoint(),
                    status = %response.status(),
                    "contact form was not accepted"
                );
                Notification::error(FAILED_MESSAGE)
            }
            Err(e) => {
                tracing::warn!(
                    endpoint = self.api.endpoint(),
                    error = %e,
                    "contact form request failed"
                );
                Notification::error(ERROR_MESSAGE)
            }
        };

        self.notifier.show(notification);
    }
}
