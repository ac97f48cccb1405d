//! Application wiring and lifecycle management.
//!
//! [`Application::build`] selects providers from settings, binds the
//! listener (port 0 = OS assigned, used by tests), and assembles the
//! router; [`Application::run_until_stopped`] serves until the process
//! exits.

use crate::config::Settings;
use crate::error::AppError;
use crate::handlers::{ask_paint_guru, health_check, submit_estimate};
use crate::middleware::asset_headers_middleware;
use crate::services::{
    ApiEmailProvider, EmailProvider, KnowledgeBase, MockEmailProvider, NotificationDispatcher,
    RecaptchaVerifier, SmtpProvider, TokenVerifier, WebhookForwarder,
};
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub knowledge: Arc<KnowledgeBase>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub dispatcher: Arc<NotificationDispatcher>,
}

/// Email provider selection: an API key wins, then SMTP if enabled, else a
/// disabled mock so dispatch skips email with a warning instead of failing.
fn select_email_provider(settings: &Settings) -> Arc<dyn EmailProvider> {
    if settings.email.api.key.is_some() {
        tracing::info!(url = %settings.email.api.url, "API email provider initialized");
        return Arc::new(ApiEmailProvider::new(settings.email.clone()));
    }

    if settings.email.smtp.enabled {
        return match SmtpProvider::new(settings.email.clone()) {
            Ok(provider) => {
                tracing::info!(host = %settings.email.smtp.host, "SMTP email provider initialized");
                Arc::new(provider)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize SMTP provider: {}. Email dispatch disabled.",
                    e
                );
                Arc::new(MockEmailProvider::new(false))
            }
        };
    }

    tracing::warn!("No email provider configured, email dispatch will be skipped");
    Arc::new(MockEmailProvider::new(false))
}

/// The three API routes, with everything else falling through to static
/// assets decorated by the asset-header middleware.
pub fn build_router(state: AppState, assets_dir: &str) -> Router {
    let assets = Router::new()
        .fallback_service(ServeDir::new(assets_dir))
        .layer(from_fn(asset_headers_middleware));

    Router::new()
        .route("/api/", get(health_check))
        .route("/api/estimate", post(submit_estimate))
        .route("/paint-guru", post(ask_paint_guru))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given settings.
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        let email_provider = select_email_provider(&settings);

        let webhook = settings
            .notify
            .webhook_url
            .clone()
            .map(WebhookForwarder::new);
        if webhook.is_none() {
            tracing::warn!("No webhook URL configured, lead forwarding will be skipped");
        }

        let verifier: Arc<dyn TokenVerifier> =
            Arc::new(RecaptchaVerifier::new(settings.recaptcha.clone()));
        if verifier.is_enabled() {
            tracing::info!("reCAPTCHA verification enabled");
        } else {
            tracing::warn!("No reCAPTCHA secret configured, verification disabled");
        }

        let dispatcher = NotificationDispatcher::new(
            email_provider,
            webhook,
            settings.notify.owner_email.clone(),
        );

        let state = AppState {
            knowledge: Arc::new(KnowledgeBase::new()),
            verifier,
            dispatcher: Arc::new(dispatcher),
        };

        let router = build_router(state, &settings.assets.dir);

        let address = format!("{}:{}", settings.server.host, settings.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }
}
