//! HTTP client for the spam-detection API

use serde_json::Value;
use tracing::{debug, info, warn};

use super::types::*;
use crate::error::Result;
use crate::samples::SampleMessage;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const PREDICT_PATH: &str = "/api/predict";

/// Thin wrapper around `reqwest::Client` with client defaults: no timeout
/// override and no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /api/auth/login`. Any HTTP status is returned as an outcome;
    /// only transport failures are errors.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome> {
        info!("Logging in as {}", credentials.email);

        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(credentials)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = parse_body(&response.text().await?);
        debug!("Login returned status {}", status);

        Ok(LoginOutcome { status, body })
    }

    /// `POST /api/predict` with the bearer token
    pub async fn predict(
        &self,
        token: &BearerToken,
        message: &str,
        message_type: MessageType,
    ) -> Result<PredictionResponse> {
        let request = PredictRequest {
            message: message.to_string(),
            message_type,
        };

        let response = self
            .client
            .post(self.url(PREDICT_PATH))
            .bearer_auth(token.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = parse_body(&response.text().await?);
        debug!("Predict returned status {}: {}", status, body);

        Ok(PredictionResponse {
            status,
            outcome: PredictionOutcome::from_body(&body),
        })
    }

    /// Submit every sample in order. A failed request is recorded for that
    /// sample and does not stop the rest.
    pub async fn predict_samples(
        &self,
        token: &BearerToken,
        samples: &[SampleMessage],
        message_type: MessageType,
    ) -> Vec<PredictionReport> {
        let mut reports = Vec::with_capacity(samples.len());

        for sample in samples {
            let report = match self.predict(token, sample.text, message_type).await {
                Ok(response) => {
                    if let PredictionOutcome::Failure { error, .. } = &response.outcome {
                        warn!("Prediction for {} rejected: {}", sample.label, error);
                    }
                    PredictionReport {
                        label: sample.label.to_string(),
                        message: sample.text.to_string(),
                        status: Some(response.status),
                        outcome: response.outcome,
                    }
                }
                Err(e) => {
                    warn!("Prediction request for {} failed: {}", sample.label, e);
                    PredictionReport {
                        label: sample.label.to_string(),
                        message: sample.text.to_string(),
                        status: None,
                        outcome: PredictionOutcome::Failure {
                            error: e.to_string(),
                            language: None,
                        },
                    }
                }
            };
            reports.push(report);
        }

        reports
    }
}

/// Parse a response body as JSON, keeping non-JSON bodies as a string value
fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Log in and run every sample through the prediction endpoint. A non-200
/// login stops here with [`DiagError::LoginFailed`](crate::DiagError::LoginFailed)
/// and no prediction request is made.
pub async fn run_smoke_test(
    client: &ApiClient,
    credentials: &Credentials,
    samples: &[SampleMessage],
    message_type: MessageType,
) -> Result<Vec<PredictionReport>> {
    let login = client.login(credentials).await?;
    let token = login.token()?;
    Ok(client.predict_samples(&token, samples, message_type).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url(LOGIN_PATH), "http://localhost:5000/api/auth/login");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(r#"{"token":"t"}"#)["token"], "t");
        assert_eq!(parse_body("<html>oops</html>"), Value::String("<html>oops</html>".to_string()));
    }
}
