use axum::{routing::post, Router};

use super::AppState;

mod notification;
pub mod route;
pub mod schema;

pub const SEND_EMAIL_PATH: &str = "/api/send-email";

pub fn router() -> Router<AppState> {
    Router::new().route(SEND_EMAIL_PATH, post(route::send_email))
}
