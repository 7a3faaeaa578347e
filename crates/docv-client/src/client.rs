//! # Verification Client
//!
//! HTTP client for the remote verification endpoint. Wraps a
//! `reqwest::Client` with the configured base URL, bearer authentication,
//! and per-request timeout.
//!
//! ## Error Handling
//!
//! Non-success responses are parsed for a server-supplied `message`, which
//! is surfaced verbatim; transport failures before a response map to
//! [`ClientError::Transport`].
//!
//! ## Retry
//!
//! A submission is a single POST. Retries are NOT built into the client —
//! the caller owns retry policy.

use std::time::Duration;

use crate::config::{ConfigError, EndpointConfig, TenantCredentials};
use crate::error::ClientError;
use crate::outcome::VerificationOutcome;
use crate::request::VerificationRequest;

/// Path of the submission endpoint, relative to the API base URL.
const SUBMIT_PATH: &str = "runFlashCheck";

/// Fallback message when a failure response body carries no parsable
/// `message` field.
const GENERIC_FAILURE: &str = "Failed to check document";

/// Client for the document verification API.
#[derive(Debug, Clone)]
pub struct VerificationClient {
    http: reqwest::Client,
    submit_url: String,
}

impl VerificationClient {
    /// Create a new client from endpoint configuration and credentials.
    pub fn new(
        endpoint: &EndpointConfig,
        credentials: &TenantCredentials,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(endpoint.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                let mut auth = reqwest::header::HeaderValue::from_str(&format!(
                    "Bearer {}",
                    credentials.api_key()
                ))
                .map_err(|_| ClientError::Config(ConfigError::InvalidApiKey))?;
                auth.set_sensitive(true);
                headers.insert(reqwest::header::AUTHORIZATION, auth);
                headers.insert(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| ClientError::Transport {
                endpoint: "client_init".into(),
                source: e,
            })?;

        let submit_url = format!(
            "{}/{SUBMIT_PATH}",
            endpoint.base_url.as_str().trim_end_matches('/')
        );
        Ok(Self { http, submit_url })
    }

    /// Submit one verification request and await its outcome.
    ///
    /// Issues a single POST; no retry is attempted internally. On a
    /// non-success status the server's `message` is raised verbatim via
    /// [`ClientError::Server`] (or [`ClientError::Auth`] for credential
    /// rejections).
    pub async fn submit(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, ClientError> {
        tracing::debug!(check_id = %request.check_id, "submitting verification request");

        let resp = self
            .http
            .post(&self.submit_url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                endpoint: self.submit_url.clone(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = extract_server_message(&body);
            tracing::warn!(check_id = %request.check_id, status = status.as_u16(), %message,
                "verification request failed");
            let auth_rejected = status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN;
            return Err(if auth_rejected {
                ClientError::Auth { message }
            } else {
                ClientError::Server {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        let outcome: VerificationOutcome = resp
            .json()
            .await
            .map_err(|e| ClientError::Deserialization { source: e })?;
        tracing::info!(check_id = %request.check_id, passed = outcome.passed,
            command_instance_id = %outcome.command_instance_id, "verification completed");
        Ok(outcome)
    }
}

/// Pull the server-supplied `message` out of a failure body, falling back
/// to a generic message when the body is not parsable JSON.
fn extract_server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_extracted_verbatim() {
        assert_eq!(
            extract_server_message(r#"{"message": "quota exceeded"}"#),
            "quota exceeded"
        );
    }

    #[test]
    fn unparsable_body_falls_back_to_generic_message() {
        assert_eq!(extract_server_message("<html>502</html>"), GENERIC_FAILURE);
        assert_eq!(extract_server_message(""), GENERIC_FAILURE);
        assert_eq!(
            extract_server_message(r#"{"error": "no message field"}"#),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn submit_url_joins_without_doubled_slash() {
        let endpoint = EndpointConfig::new(
            "http://127.0.0.1:9000/api/v1/".parse().unwrap(),
            "http://127.0.0.1:9000/getDocument".parse().unwrap(),
        );
        let credentials = TenantCredentials::new("k", "a").unwrap();
        let client = VerificationClient::new(&endpoint, &credentials).unwrap();
        assert_eq!(client.submit_url, "http://127.0.0.1:9000/api/v1/runFlashCheck");
    }
}
