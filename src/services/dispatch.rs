//! Best-effort fan-out of a validated lead to the owner inbox, the
//! customer auto-reply, and the CRM webhook.
//!
//! The three channels are independent: each one runs even when the others
//! fail, and no outcome here ever fails the submission itself. The caller
//! gets a [`DispatchReport`] and decides what to log.

use crate::models::Lead;
use crate::services::providers::{EmailMessage, EmailProvider, WebhookForwarder};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Result of one notification channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    Skipped(&'static str),
    Failed(String),
}

/// Per-channel outcomes for one estimate submission.
#[derive(Debug)]
pub struct DispatchReport {
    pub submission_id: Uuid,
    pub owner_email: DispatchOutcome,
    pub customer_email: DispatchOutcome,
    pub webhook: DispatchOutcome,
}

impl DispatchReport {
    pub fn outcomes(&self) -> [(&'static str, &DispatchOutcome); 3] {
        [
            ("owner_email", &self.owner_email),
            ("customer_email", &self.customer_email),
            ("webhook", &self.webhook),
        ]
    }

    /// One log line per channel, correlated by submission id.
    pub fn log(&self) {
        for (channel, outcome) in self.outcomes() {
            match outcome {
                DispatchOutcome::Sent => {
                    tracing::info!(
                        submission_id = %self.submission_id,
                        channel,
                        "Notification sent"
                    );
                }
                DispatchOutcome::Skipped(reason) => {
                    tracing::warn!(
                        submission_id = %self.submission_id,
                        channel,
                        reason = %reason,
                        "Notification skipped"
                    );
                }
                DispatchOutcome::Failed(error) => {
                    tracing::error!(
                        submission_id = %self.submission_id,
                        channel,
                        error = %error,
                        "Notification failed"
                    );
                }
            }
        }
    }
}

pub struct NotificationDispatcher {
    email: Arc<dyn EmailProvider>,
    webhook: Option<WebhookForwarder>,
    owner_email: Option<String>,
}

impl NotificationDispatcher {
    pub fn new(
        email: Arc<dyn EmailProvider>,
        webhook: Option<WebhookForwarder>,
        owner_email: Option<String>,
    ) -> Self {
        Self {
            email,
            webhook,
            owner_email,
        }
    }

    /// Runs all three channels concurrently and reports each outcome.
    pub async fn dispatch(&self, lead: &Lead) -> DispatchReport {
        let (owner_email, customer_email, webhook) = tokio::join!(
            self.notify_owner(lead),
            self.send_auto_reply(lead),
            self.forward_webhook(lead),
        );

        DispatchReport {
            submission_id: Uuid::new_v4(),
            owner_email,
            customer_email,
            webhook,
        }
    }

    async fn notify_owner(&self, lead: &Lead) -> DispatchOutcome {
        let Some(owner) = self.owner_email.as_deref() else {
            return DispatchOutcome::Skipped("no owner email configured");
        };
        if !self.email.is_enabled() {
            return DispatchOutcome::Skipped("email provider disabled");
        }

        match self.email.send(&owner_notification(owner, lead)).await {
            Ok(()) => DispatchOutcome::Sent,
            Err(e) => DispatchOutcome::Failed(e.to_string()),
        }
    }

    async fn send_auto_reply(&self, lead: &Lead) -> DispatchOutcome {
        if !self.email.is_enabled() {
            return DispatchOutcome::Skipped("email provider disabled");
        }

        match self.email.send(&customer_auto_reply(lead)).await {
            Ok(()) => DispatchOutcome::Sent,
            Err(e) => DispatchOutcome::Failed(e.to_string()),
        }
    }

    async fn forward_webhook(&self, lead: &Lead) -> DispatchOutcome {
        let Some(webhook) = self.webhook.as_ref() else {
            return DispatchOutcome::Skipped("no webhook configured");
        };

        match webhook.forward(lead).await {
            Ok(()) => DispatchOutcome::Sent,
            Err(e) => DispatchOutcome::Failed(e.to_string()),
        }
    }
}

fn owner_notification(owner: &str, lead: &Lead) -> EmailMessage {
    let received = Utc::now().format("%Y-%m-%d %H:%M UTC");
    let html = format!(
        "<h2>New estimate request</h2>\
         <table>\
         <tr><td><b>Name</b></td><td>{name}</td></tr>\
         <tr><td><b>Email</b></td><td>{email}</td></tr>\
         <tr><td><b>Phone</b></td><td>{phone}</td></tr>\
         <tr><td><b>Service</b></td><td>{service}</td></tr>\
         <tr><td><b>Message</b></td><td>{message}</td></tr>\
         </table>\
         <p>Received {received}</p>",
        name = escape_html(&lead.name),
        email = escape_html(&lead.email),
        phone = escape_html(&lead.phone),
        service = escape_html(&lead.service),
        message = escape_html(&lead.message),
        received = received,
    );

    EmailMessage {
        to: owner.to_string(),
        subject: format!("New estimate request from {}", lead.name),
        html,
    }
}

fn customer_auto_reply(lead: &Lead) -> EmailMessage {
    let html = format!(
        "<p>Hi {name},</p>\
         <p>Thanks for requesting an estimate for <b>{service}</b>. We have \
         your details and will reach out within one business day to schedule \
         a free walkthrough.</p>\
         <p>Bayfront Painting<br>(251) 555-0199</p>",
        name = escape_html(&lead.name),
        service = escape_html(&lead.service),
    );

    EmailMessage {
        to: lead.email.clone(),
        subject: "We received your estimate request".to_string(),
        html,
    }
}

/// Form fields land in provider-rendered HTML, so the basic entities are
/// escaped before interpolation.
fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
