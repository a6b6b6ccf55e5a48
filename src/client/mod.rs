//! The contact form as the browser sees it: field state, a single submission
//! request and the notification reporting its outcome.

mod api;
mod form;
mod notification;

pub use self::api::ContactApi;
pub use self::form::{
    ContactFields, ContactForm, Field, SubmittingFlag, ERROR_MESSAGE, FAILED_MESSAGE,
    SENT_MESSAGE,
};
pub use self::notification::{Notification, NotificationKind, Notifier, AUTO_DISMISS_AFTER};
