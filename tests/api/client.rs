use std::time::Duration;

use portfolio::client::{
    ContactApi, ContactFields, ContactForm, Field, NotificationKind, ERROR_MESSAGE,
    FAILED_MESSAGE, SENT_MESSAGE,
};
use wiremock::{matchers::any, Mock, ResponseTemplate};

use crate::helper::spawn_app;

fn filled_form(base_url: &str, email: &str) -> ContactForm {
    let mut form = ContactForm::new(ContactApi::new(base_url));
    form.set(Field::Name, "A");
    form.set(Field::Email, email);
    form.set(Field::Message, "line1\nline2");
    form
}

#[tokio::test]
async fn successful_submission_clears_the_form() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "abc" })))
        .expect(1)
        .mount(&app.email_server)
        .await;
    let mut form = filled_form(&app.addr, "a@b.com");

    form.submit().await;

    assert_eq!(form.fields(), &ContactFields::default());
    assert!(!form.is_submitting());
    let notification = form.notification().expect("A notification should be shown.");
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, SENT_MESSAGE);
}

#[tokio::test]
async fn rejected_submission_keeps_the_fields() {
    let app = spawn_app().await;
    let mut form = filled_form(&app.addr, "");
    let before = form.fields().clone();

    form.submit().await;

    assert_eq!(form.fields(), &before);
    assert!(!form.is_submitting());
    let notification = form.notification().expect("A notification should be shown.");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, FAILED_MESSAGE);
}

#[tokio::test]
async fn provider_failure_is_reported_and_the_fields_kept() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;
    let mut form = filled_form(&app.addr, "a@b.com");

    form.submit().await;

    assert_eq!(form.fields().email, "a@b.com");
    assert_eq!(form.notification().unwrap().message, FAILED_MESSAGE);
}

#[tokio::test]
async fn unreachable_server_is_reported_as_an_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let mut form = filled_form(&addr, "a@b.com");

    form.submit().await;

    assert_eq!(form.fields().name, "A");
    assert!(!form.is_submitting());
    assert_eq!(form.notification().unwrap().message, ERROR_MESSAGE);
}

#[tokio::test]
async fn notification_can_be_dismissed_by_hand() {
    let app = spawn_app().await;
    let mut form = filled_form(&app.addr, "");
    form.submit().await;

    form.dismiss_notification();

    assert_eq!(form.notification(), None);
}

#[tokio::test]
async fn submitting_flag_is_raised_while_the_request_is_in_flight() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": "slow" }))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&app.email_server)
        .await;
    let mut form = filled_form(&app.addr, "a@b.com");
    let flag = form.submitting_flag();

    let mut submit = Box::pin(form.submit());
    let still_running = tokio::time::timeout(Duration::from_millis(200), &mut submit).await;

    assert!(still_running.is_err());
    assert!(flag.is_set());

    drop(submit);
    assert!(!flag.is_set());
}

#[tokio::test]
async fn cancelled_submission_clears_the_submitting_flag() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": "slow" }))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&app.email_server)
        .await;
    let mut form = filled_form(&app.addr, "a@b.com");

    let outcome = tokio::time::timeout(Duration::from_millis(200), form.submit()).await;

    assert!(outcome.is_err());
    assert!(!form.is_submitting());
    assert_eq!(form.fields().name, "A");
    assert_eq!(form.notification(), None);
}
