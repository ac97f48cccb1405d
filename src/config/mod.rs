use crate::error::AppError;
use config::{Config, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

/// Runtime settings, read from an optional `configuration` file and then
/// `APP`-prefixed environment variables (`APP__NOTIFY__OWNER_EMAIL`, ...).
///
/// Every section has a working default so the binary can start with no
/// configuration at all; outbound integrations stay disabled until their
/// credentials are set.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub assets: AssetSettings,
    #[serde(default)]
    pub recaptcha: RecaptchaSettings,
    #[serde(default)]
    pub email: EmailSettings,
    #[serde(default)]
    pub notify: NotifySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetSettings {
    /// Directory served for any path that no API route claims.
    #[serde(default = "default_assets_dir")]
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecaptchaSettings {
    /// Verification is skipped entirely while no secret is configured.
    #[serde(default)]
    pub secret: Option<Secret<String>>,
    #[serde(default = "default_verify_url")]
    pub verify_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    #[serde(default = "default_from_email")]
    pub from_email: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default)]
    pub api: EmailApiSettings,
    #[serde(default)]
    pub smtp: SmtpSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailApiSettings {
    #[serde(default = "default_email_api_url")]
    pub url: String,
    #[serde(default)]
    pub key: Option<Secret<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpSettings {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotifySettings {
    /// Inbox that receives the new-lead notification. Unset disables it.
    #[serde(default)]
    pub owner_email: Option<String>,
    /// Optional CRM endpoint that receives each lead as JSON.
    #[serde(default)]
    pub webhook_url: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let settings = Config::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
        }
    }
}

impl Default for RecaptchaSettings {
    fn default() -> Self {
        Self {
            secret: None,
            verify_url: default_verify_url(),
        }
    }
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            from_email: default_from_email(),
            from_name: default_from_name(),
            api: EmailApiSettings::default(),
            smtp: SmtpSettings::default(),
        }
    }
}

impl Default for EmailApiSettings {
    fn default() -> Self {
        Self {
            url: default_email_api_url(),
            key: None,
        }
    }
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            user: String::new(),
            password: String::new(),
            enabled: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_assets_dir() -> String {
    "public".to_string()
}

fn default_verify_url() -> String {
    "https://www.google.com/recaptcha/api/siteverify".to_string()
}

fn default_from_email() -> String {
    "no-reply@bayfrontpainting.com".to_string()
}

fn default_from_name() -> String {
    "Bayfront Painting".to_string()
}

fn default_email_api_url() -> String {
    "https://api.resend.com/emails".to_string()
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}
