use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, AppResult};

use super::endpoints;
use super::models::{
    AnalysisRequest, AnalysisResult, HealthStatus, InboxFetchRequest, InboxFetchResult,
    ReplyRequest, ReplyResult,
};
use super::sanitize::{self, MessageSanitizer};

#[derive(Debug, Clone)]
pub struct PrioritizerClient {
    http: Client,
    base_url: String,
    sanitizers: &'static [MessageSanitizer],
}

impl PrioritizerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            sanitizers: sanitize::DEFAULT_SANITIZERS,
        }
    }

    /// Replaces the error-message sanitizer chain, for backends with a
    /// different error serialization.
    pub fn with_sanitizers(mut self, sanitizers: &'static [MessageSanitizer]) -> Self {
        self.sanitizers = sanitizers;
        self
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> AppResult<AnalysisResult> {
        self.post_json(endpoints::analyze(), request).await
    }

    pub async fn fetch_inbox(&self, request: &InboxFetchRequest) -> AppResult<InboxFetchResult> {
        self.post_json(endpoints::fetch_inbox(), request).await
    }

    pub async fn generate_reply(&self, request: &ReplyRequest) -> AppResult<ReplyResult> {
        self.post_json(endpoints::generate_reply(), request).await
    }

    pub async fn health(&self) -> AppResult<HealthStatus> {
        let url = self.endpoint_url(endpoints::health())?;
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        health_outcome(status, &body)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = self.endpoint_url(endpoint)?;
        debug!("POST {url}");
        let response = self.http.post(url).json(body).send().await?;
        self.parse_json_response(response).await
    }

    fn endpoint_url(&self, endpoint: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.set_path(endpoint.trim_start_matches('/'));
        Ok(url)
    }

    async fn parse_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(normalize_failure(status, &body, self.sanitizers))
    }
}

/// The liveness probe has a simpler contract than the POST operations: any
/// non-OK status is a bare unavailable failure, whatever the body says.
fn health_outcome(status: StatusCode, body: &str) -> AppResult<HealthStatus> {
    if !status.is_success() {
        return Err(AppError::Api("API unavailable".to_string()));
    }

    Ok(serde_json::from_str(body)?)
}

/// Turns a non-OK response into the single user-presentable failure value.
fn normalize_failure(status: StatusCode, body: &str, sanitizers: &[MessageSanitizer]) -> AppError {
    let detail = extract_detail(body).unwrap_or_else(|| body.to_string());
    let message = sanitize::clean(&detail, sanitizers);

    if sanitize::is_auth_failure(&message) {
        return AppError::Auth(sanitize::AUTH_REMEDIATION_HINT.to_string());
    }

    if message.is_empty() {
        return AppError::Api(format!("request failed with status {status}"));
    }

    AppError::Api(message)
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    detail: Option<String>,
}

fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body).ok()?.detail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failure_detail_becomes_remediation_hint() {
        let error = normalize_failure(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "b'[AUTHENTICATIONFAILED] Invalid credentials (Failure)'"}"#,
            sanitize::DEFAULT_SANITIZERS,
        );

        match error {
            AppError::Auth(message) => assert_eq!(message, sanitize::AUTH_REMEDIATION_HINT),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[test]
    fn detail_field_is_passed_through_verbatim() {
        let error = normalize_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"detail": "Some other error"}"#,
            sanitize::DEFAULT_SANITIZERS,
        );

        match error {
            AppError::Api(message) => assert_eq!(message, "Some other error"),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_used_verbatim() {
        let error = normalize_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            sanitize::DEFAULT_SANITIZERS,
        );

        match error {
            AppError::Api(message) => assert_eq!(message, "Internal Server Error"),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn empty_body_falls_back_to_status_message() {
        let error = normalize_failure(
            StatusCode::BAD_GATEWAY,
            "",
            sanitize::DEFAULT_SANITIZERS,
        );

        match error {
            AppError::Api(message) => assert!(message.contains("502")),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn extract_detail_requires_valid_envelope() {
        assert_eq!(
            extract_detail(r#"{"detail": "IMAP fetch failed"}"#).as_deref(),
            Some("IMAP fetch failed")
        );
        assert!(extract_detail(r#"{"message": "nope"}"#).is_none());
        assert!(extract_detail("not json").is_none());
    }

    #[test]
    fn health_non_ok_is_unavailable_regardless_of_body() {
        for body in ["", "Internal Server Error", r#"{"status": "healthy"}"#] {
            let error = health_outcome(StatusCode::SERVICE_UNAVAILABLE, body)
                .expect_err("non-OK status must fail");
            match error {
                AppError::Api(message) => assert_eq!(message, "API unavailable"),
                other => panic!("expected api error, got {other:?}"),
            }
        }
    }

    #[test]
    fn health_ok_returns_decoded_body_unchanged() {
        let status = health_outcome(
            StatusCode::OK,
            r#"{"status": "healthy", "timestamp": 1756112400.5}"#,
        )
        .expect("OK status should decode");

        assert_eq!(status.status, "healthy");
        assert_eq!(status.timestamp, Some(1756112400.5));
    }

    #[test]
    fn endpoint_url_joins_base_and_path() {
        let client = PrioritizerClient::new("http://localhost:8000");
        let url = client
            .endpoint_url(endpoints::analyze())
            .expect("url should parse");
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/emails/analyze");
    }
}
