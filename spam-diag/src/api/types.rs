//! Request and response types for the prediction API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{DiagError, Result};
use crate::language::Language;

/// Characters of the token shown in reports
pub const TOKEN_PREVIEW_LEN: usize = 50;

/// Login body for `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Opaque bearer token returned by a successful login
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Full token, for the `Authorization` header
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First [`TOKEN_PREVIEW_LEN`] characters
    pub fn preview(&self) -> &str {
        match self.0.char_indices().nth(TOKEN_PREVIEW_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

// Never print the whole token
impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...", self.preview())
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken({}...)", self.preview())
    }
}

/// Channel the message arrived through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Email,
    Sms,
}

/// Body for `POST /api/predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub message: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
}

/// Raw login response
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub status: u16,
    pub body: Value,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// The bearer token, available only on a 200 response
    pub fn token(&self) -> Result<BearerToken> {
        if !self.is_success() {
            return Err(DiagError::LoginFailed(self.status));
        }

        self.body
            .get("token")
            .and_then(Value::as_str)
            .map(BearerToken::new)
            .ok_or(DiagError::MissingToken)
    }
}

/// Parsed prediction response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum PredictionOutcome {
    Success {
        is_spam: Option<bool>,
        language: Option<String>,
        confidence: Option<f64>,
        indicators: Vec<String>,
    },
    /// Backend rejected the message, e.g. unsupported language
    Failure {
        error: String,
        language: Option<String>,
    },
}

impl PredictionOutcome {
    /// Interpret a response body. Any body with an `error` key is a failure,
    /// whatever the status code.
    pub fn from_body(body: &Value) -> Self {
        let Some(fields) = body.as_object() else {
            return Self::Failure {
                error: format!("Unexpected response body: {}", body),
                language: None,
            };
        };

        let language = fields
            .get("language")
            .and_then(Value::as_str)
            .map(str::to_string);

        if let Some(error) = fields.get("error") {
            let error = match error.as_str() {
                Some(s) => s.to_string(),
                None => error.to_string(),
            };
            return Self::Failure { error, language };
        }

        let indicators = fields
            .get("indicators")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| match item.as_str() {
                        Some(s) => s.to_string(),
                        None => item.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self::Success {
            is_spam: fields.get("isSpam").and_then(Value::as_bool),
            language,
            confidence: fields.get("confidence").and_then(Value::as_f64),
            indicators,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Success { language, .. } | Self::Failure { language, .. } => language.as_deref(),
        }
    }

    /// The backend's language label, if it is one the detector knows
    pub fn detected_language(&self) -> Option<Language> {
        self.language().and_then(Language::from_label)
    }

    /// Whether the backend refused the message because of its language
    pub fn is_unsupported_language(&self) -> bool {
        match self {
            Self::Failure { error, .. } => error.to_lowercase().contains("language isn't supported"),
            Self::Success { .. } => false,
        }
    }
}

/// Status code and parsed outcome of one prediction request
#[derive(Debug, Clone)]
pub struct PredictionResponse {
    pub status: u16,
    pub outcome: PredictionOutcome,
}

/// Outcome for one sample in a smoke-test run
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub label: String,
    pub message: String,
    /// `None` when the request never got a response
    pub status: Option<u16>,
    pub outcome: PredictionOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_preview_truncates() {
        let token = BearerToken::new("x".repeat(120));
        assert_eq!(token.preview().len(), TOKEN_PREVIEW_LEN);
        assert_eq!(token.as_str().len(), 120);
        assert_eq!(token.to_string(), format!("{}...", "x".repeat(50)));

        let short = BearerToken::new("abc");
        assert_eq!(short.preview(), "abc");
    }

    #[test]
    fn test_predict_request_uses_type_key() {
        let request = PredictRequest {
            message: "hi".to_string(),
            message_type: MessageType::Email,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"message": "hi", "type": "email"}));
    }

    #[test]
    fn test_login_token_requires_200() {
        let outcome = LoginOutcome {
            status: 401,
            body: json!({"token": "abc"}),
        };
        assert!(matches!(outcome.token(), Err(DiagError::LoginFailed(401))));

        let outcome = LoginOutcome {
            status: 200,
            body: json!({"message": "ok"}),
        };
        assert!(matches!(outcome.token(), Err(DiagError::MissingToken)));

        let outcome = LoginOutcome {
            status: 200,
            body: json!({"token": "abc", "user": {"role": "admin"}}),
        };
        assert_eq!(outcome.token().unwrap().as_str(), "abc");
    }

    #[test]
    fn test_success_outcome() {
        let body = json!({
            "isSpam": true,
            "language": "english",
            "confidence": 0.93,
            "indicators": ["free money", "now"]
        });
        let outcome = PredictionOutcome::from_body(&body);
        assert_eq!(
            outcome,
            PredictionOutcome::Success {
                is_spam: Some(true),
                language: Some("english".to_string()),
                confidence: Some(0.93),
                indicators: vec!["free money".to_string(), "now".to_string()],
            }
        );
        assert!(outcome.is_success());
    }

    #[test]
    fn test_success_outcome_with_missing_fields() {
        let outcome = PredictionOutcome::from_body(&json!({}));
        assert_eq!(
            outcome,
            PredictionOutcome::Success {
                is_spam: None,
                language: None,
                confidence: None,
                indicators: vec![],
            }
        );
    }

    #[test]
    fn test_failure_outcome() {
        let body = json!({
            "error": "Sorry, this language isn't supported yet",
            "language": "french"
        });
        let outcome = PredictionOutcome::from_body(&body);
        assert!(!outcome.is_success());
        assert!(outcome.is_unsupported_language());
        assert_eq!(outcome.language(), Some("french"));
        assert_eq!(outcome.detected_language(), Some(Language::French));
    }

    #[test]
    fn test_unknown_backend_label_has_no_detected_language() {
        let outcome = PredictionOutcome::from_body(&json!({
            "error": "Sorry, this language isn't supported yet",
            "language": "klingon"
        }));
        assert!(outcome.is_unsupported_language());
        assert_eq!(outcome.language(), Some("klingon"));
        assert_eq!(outcome.detected_language(), None);

        let outcome = PredictionOutcome::from_body(&json!({"error": "Unauthorized"}));
        assert!(!outcome.is_unsupported_language());
    }

    #[test]
    fn test_non_object_body_is_failure() {
        let outcome = PredictionOutcome::from_body(&json!("Internal Server Error"));
        assert!(matches!(outcome, PredictionOutcome::Failure { language: None, .. }));
    }
}
