pub mod dispatch;
pub mod knowledge;
pub mod providers;
pub mod recaptcha;

pub use dispatch::{DispatchOutcome, DispatchReport, NotificationDispatcher};
pub use knowledge::KnowledgeBase;
pub use providers::{
    ApiEmailProvider, EmailMessage, EmailProvider, MockEmailProvider, ProviderError, SmtpProvider,
    WebhookForwarder,
};
pub use recaptcha::{RecaptchaVerifier, TokenVerifier, VerifyError};
