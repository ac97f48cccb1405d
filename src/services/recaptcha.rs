use crate::config::RecaptchaSettings;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Malformed verification response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<bool, VerifyError>;
    fn is_enabled(&self) -> bool;
}

/// Checks client tokens against the reCAPTCHA siteverify endpoint.
///
/// While no secret is configured, verification is off and every token
/// passes; handlers use [`TokenVerifier::is_enabled`] to skip the call
/// entirely.
pub struct RecaptchaVerifier {
    settings: RecaptchaSettings,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

impl RecaptchaVerifier {
    pub fn new(settings: RecaptchaSettings) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl TokenVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> Result<bool, VerifyError> {
        let Some(secret) = self.settings.secret.as_ref() else {
            return Ok(true);
        };

        let response = self
            .client
            .post(&self.settings.verify_url)
            .form(&[
                ("secret", secret.expose_secret().as_str()),
                ("response", token),
            ])
            .send()
            .await
            .map_err(|e| VerifyError::Connection(format!("Failed to reach siteverify: {}", e)))?;

        let body: SiteverifyResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::Malformed(e.to_string()))?;

        if !body.success {
            tracing::warn!(
                error_codes = ?body.error_codes,
                "reCAPTCHA rejected token"
            );
        }

        Ok(body.success)
    }

    fn is_enabled(&self) -> bool {
        self.settings.secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verifier_without_secret_passes_everything() {
        let verifier = RecaptchaVerifier::new(RecaptchaSettings::default());
        assert!(!verifier.is_enabled());
        assert!(verifier.verify("anything").await.unwrap());
    }
}
