//! Estimate form payload and its validation into a [`Lead`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw estimate form submission. Every field is optional at the wire level;
/// [`EstimateRequest::validate`] decides what is actually required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EstimateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// A validated estimate submission.
///
/// The reCAPTCHA token is carried for verification but never serialized, so
/// the webhook body is exactly the five content fields.
#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    #[serde(skip_serializing)]
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing reCAPTCHA token")]
    MissingToken,

    #[error("Missing field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl EstimateRequest {
    /// Check the token first, then report every absent required field at
    /// once, in form order. Absent and empty-string values are equivalent;
    /// whitespace counts as present.
    pub fn validate(self) -> Result<Lead, ValidationError> {
        if is_blank(&self.token) {
            return Err(ValidationError::MissingToken);
        }

        let mut missing = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("service", &self.service),
        ] {
            if is_blank(value) {
                missing.push(field);
            }
        }

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(Lead {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            service: self.service.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            token: self.token.unwrap_or_default(),
        })
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().unwrap_or("").is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> EstimateRequest {
        EstimateRequest {
            name: Some("Jordan Avery".to_string()),
            email: Some("jordan@example.com".to_string()),
            phone: Some("251-555-0142".to_string()),
            service: Some("Interior Painting".to_string()),
            message: Some("Two bedrooms and a hallway.".to_string()),
            token: Some("tok-123".to_string()),
        }
    }

    #[test]
    fn test_valid_request_becomes_lead() {
        let lead = full_request().validate().expect("should validate");
        assert_eq!(lead.name, "Jordan Avery");
        assert_eq!(lead.service, "Interior Painting");
        assert_eq!(lead.token, "tok-123");
    }

    #[test]
    fn test_message_is_optional() {
        let lead = EstimateRequest {
            message: None,
            ..full_request()
        }
        .validate()
        .expect("should validate");
        assert_eq!(lead.message, "");
    }

    #[test]
    fn test_missing_token_reported_before_missing_fields() {
        let err = EstimateRequest::default().validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingToken);
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let err = EstimateRequest {
            token: Some(String::new()),
            ..full_request()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "Missing reCAPTCHA token");
    }

    #[test]
    fn test_missing_fields_collected_in_form_order() {
        let err = EstimateRequest {
            name: None,
            phone: Some(String::new()),
            ..full_request()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "Missing field(s): name, phone");
    }

    #[test]
    fn test_all_fields_missing_lists_every_field() {
        let err = EstimateRequest {
            token: Some("tok-123".to_string()),
            ..EstimateRequest::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing field(s): name, email, phone, service"
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let lead = EstimateRequest {
            name: Some(" ".to_string()),
            ..full_request()
        }
        .validate()
        .expect("whitespace is not blank");
        assert_eq!(lead.name, " ");
    }

    #[test]
    fn test_lead_serializes_without_token() {
        let lead = full_request().validate().unwrap();
        let value = serde_json::to_value(&lead).unwrap();
        assert!(value.get("token").is_none());
        assert_eq!(value["name"], "Jordan Avery");
        assert_eq!(value["message"], "Two bedrooms and a hallway.");
    }
}
