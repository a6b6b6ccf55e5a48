use std::{io, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{ContactSettings, DeliveryMode, Settings},
    email::{DryRunEmailSender, EmailClient, EmailSender},
};

mod asset;
mod contact;
mod error;
mod health;

pub use self::contact::SEND_EMAIL_PATH;

#[derive(Clone)]
pub struct AppState {
    email_sender: Arc<dyn EmailSender>,
    contact: Arc<ContactSettings>,
}

fn app_router(settings: &Settings) -> Router<AppState> {
    let router = health::router().merge(contact::router());

    match &settings.application.static_dir {
        Some(static_dir) => router.merge(asset::router(static_dir)),
        None => router,
    }
}

pub struct App {
    listener: TcpListener,
    router: Router,
}

impl App {
    /// Builds the email collaborator and binds the listener. Nothing is served
    /// until [`App::serve`] is awaited.
    pub async fn with(config: Settings) -> anyhow::Result<Self> {
        let email_sender: Arc<dyn EmailSender> = match config.email_client.mode {
            DeliveryMode::Live => Arc::new(
                EmailClient::new(
                    config.email_client.base_url.clone(),
                    config.email_client.sender_email.clone(),
                    config.email_client.authorization_token.clone(),
                    config.email_client.timeout(),
                )
                .context("Failed to build the email client.")?,
            ),
            DeliveryMode::DryRun => {
                tracing::warn!("email delivery is in dry run mode, no email will be sent");
                Arc::new(DryRunEmailSender)
            }
        };

        let state = AppState {
            email_sender,
            contact: Arc::new(config.contact.clone()),
        };

        let router = app_router(&config)
            .with_state(state)
            .layer(CorsLayer::permissive())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}."))?;

        Ok(Self { listener, router })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        axum::serve(self.listener, self.router.into_make_service()).await
    }
}
