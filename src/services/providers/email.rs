use super::{EmailMessage, EmailProvider, ProviderError};
use crate::config::EmailSettings;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Sends through an HTTP email API (Resend-shaped: JSON body, bearer key).
pub struct ApiEmailProvider {
    settings: EmailSettings,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ApiSendRequest<'a> {
    from: String,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiSendResponse {
    #[serde(default)]
    id: Option<String>,
}

impl ApiEmailProvider {
    pub fn new(settings: EmailSettings) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl EmailProvider for ApiEmailProvider {
    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError> {
        let key = self.settings.api.key.as_ref().ok_or_else(|| {
            ProviderError::Configuration("Email API key is not configured".to_string())
        })?;

        let request = ApiSendRequest {
            from: format!("{} <{}>", self.settings.from_name, self.settings.from_email),
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(&self.settings.api.url)
            .bearer_auth(key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(format!("Failed to reach email API: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::SendFailed(format!(
                "Email API returned status {}: {}",
                status, body
            )));
        }

        // The API acknowledges with an id; a missing or malformed body on a
        // 2xx still counts as sent.
        let provider_id = response
            .json::<ApiSendResponse>()
            .await
            .ok()
            .and_then(|body| body.id);

        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            provider_id = ?provider_id,
            "Email sent via API"
        );

        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.settings.api.key.is_some()
    }
}

/// Sends through an SMTP relay with STARTTLS.
pub struct SmtpProvider {
    settings: EmailSettings,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpProvider {
    pub fn new(settings: EmailSettings) -> Result<Self, ProviderError> {
        if !settings.smtp.enabled {
            return Ok(Self {
                settings,
                transport: None,
            });
        }

        let creds = Credentials::new(settings.smtp.user.clone(), settings.smtp.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp.host)
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create SMTP relay: {}", e))
            })?
            .port(settings.smtp.port)
            .credentials(creds)
            .build();

        Ok(Self {
            settings,
            transport: Some(transport),
        })
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError> {
        if !self.settings.smtp.enabled {
            return Err(ProviderError::NotEnabled(
                "SMTP email provider is not enabled".to_string(),
            ));
        }

        let transport = self.transport.as_ref().ok_or_else(|| {
            ProviderError::Configuration("SMTP transport not initialized".to_string())
        })?;

        let from_mailbox: Mailbox =
            format!("{} <{}>", self.settings.from_name, self.settings.from_email)
                .parse()
                .map_err(|e| {
                    ProviderError::Configuration(format!("Invalid from address: {}", e))
                })?;

        let to_mailbox: Mailbox = email
            .to
            .parse()
            .map_err(|e| ProviderError::InvalidRecipient(format!("Invalid recipient: {}", e)))?;

        let message = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(email.html.clone())
            .map_err(|e| ProviderError::SendFailed(format!("Failed to build message: {}", e)))?;

        transport
            .send(message)
            .await
            .map_err(|e| ProviderError::SendFailed(format!("Failed to send email: {}", e)))?;

        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Email sent via SMTP"
        );

        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.settings.smtp.enabled
    }
}

/// Mock email provider for testing
pub struct MockEmailProvider {
    enabled: bool,
    send_count: AtomicU64,
}

impl MockEmailProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            send_count: AtomicU64::new(0),
        }
    }

    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotEnabled(
                "Mock email provider is not enabled".to_string(),
            ));
        }

        self.send_count.fetch_add(1, Ordering::SeqCst);

        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "[MOCK] Email would be sent"
        );

        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
