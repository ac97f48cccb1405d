use super::ProviderError;
use crate::models::Lead;
use reqwest::Client;

/// Forwards each validated lead to the configured CRM webhook as JSON.
pub struct WebhookForwarder {
    url: String,
    client: Client,
}

impl WebhookForwarder {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }

    pub async fn forward(&self, lead: &Lead) -> Result<(), ProviderError> {
        let response = self
            .client
            .post(&self.url)
            .json(lead)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(format!("Failed to reach webhook: {}", e)))?;

        if !response.status().is_success() {
            return Err(ProviderError::SendFailed(format!(
                "Webhook returned status {}",
                response.status()
            )));
        }

        tracing::info!(email = %lead.email, "Lead forwarded to webhook");

        Ok(())
    }
}
