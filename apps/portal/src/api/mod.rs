use std::sync::Arc;

use anyhow::Context;
use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::Organization;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Clone)]
pub struct MemberApiClient {
    inner: reqwest::Client,
    config: Arc<AppConfig>,
    base_url: String,
}

impl MemberApiClient {
    pub fn new(config: AppConfig) -> ClientResult<Self> {
        let timeout = config.request_timeout;
        let base_url = normalize_base_url(&config.api_base_url);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            inner: client,
            config: Arc::new(config),
            base_url,
        })
    }

    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Fetches the full coaching hierarchy for one company.
    pub async fn get_organization(
        &self,
        company_id: &str,
    ) -> ClientResult<ApiEnvelope<Organization>> {
        let path = format!("companies/{company_id}/organization");
        let builder = self.request(Method::GET, &path, Some(company_id))?;
        self.send(builder).await
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        company_override: Option<&str>,
    ) -> ClientResult<reqwest::RequestBuilder> {
        let url = self.join_path(path);
        let mut builder = self.inner.request(method, url);

        if let Some(token) = self.config.bearer_token() {
            builder = builder.header(header::AUTHORIZATION, token);
        }

        if let Some(company) = self.config.company_header(company_override) {
            builder = builder.header("X-Company-Id", company);
        }

        Ok(builder)
    }

    fn join_path(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T>(&self, builder: reqwest::RequestBuilder) -> ClientResult<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await.map_err(ClientError::from)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::from)?;

        if bytes.is_empty() {
            return Err(ClientError::EmptyResponse(status));
        }

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&bytes).map_err(ClientError::from)?;

        if status.is_success() && envelope.success {
            Ok(envelope)
        } else if let Some(err) = envelope.error.clone() {
            Err(ClientError::Api(err.with_status(status)))
        } else {
            Err(ClientError::UnexpectedStatus {
                status,
                body: bytes.to_vec(),
            })
        }
    }
}

fn normalize_base_url(input: &str) -> String {
    input.trim_end_matches('/').to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    // No `#[serde(default)]` here: on a generic field it would drag a
    // `T: Default` bound into the Deserialize impl, and an absent field
    // already deserializes to `None`.
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default)]
    pub trace_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<Value>,
    #[serde(skip)]
    pub status: Option<StatusCode>,
}

impl ApiErrorBody {
    fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("api error: {0}")]
    Api(ApiErrorBody),
    #[error("empty response body: {0}")]
    EmptyResponse(StatusCode),
    #[error("unexpected status {status}: {body:?}")]
    UnexpectedStatus { status: StatusCode, body: Vec<u8> },
    #[error("client setup failed: {0}")]
    Setup(#[from] anyhow::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(body) => body.status,
            Self::EmptyResponse(status) => Some(*status),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Transient failures are worth another attempt; anything carrying a
    /// definitive server verdict is not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) | Self::EmptyResponse(_) => true,
            Self::UnexpectedStatus { status, .. } => status.is_server_error(),
            Self::Decode(_) | Self::Api(_) | Self::Setup(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_organization_payload() {
        let raw = r#"{
            "success": true,
            "data": {
                "company_name": "FitLife Wellness",
                "practitioners": [
                    {"id": 1, "name": "Dr. Sarah Chen", "teams": []}
                ]
            },
            "trace_id": "t-123"
        }"#;
        let envelope: ApiEnvelope<Organization> = serde_json::from_str(raw).expect("decode");
        assert!(envelope.success);
        let org = envelope.data.expect("data");
        assert_eq!(org.practitioners.len(), 1);
        assert_eq!(envelope.trace_id.as_deref(), Some("t-123"));
    }

    #[test]
    fn envelope_stays_generic_over_non_default_payloads() {
        // Mirrors the bound `send` uses: DeserializeOwned only. A payload
        // without a Default impl must still decode, and an absent `data`
        // field must come back as None.
        fn decode<T: DeserializeOwned>(raw: &str) -> ApiEnvelope<T> {
            serde_json::from_str(raw).expect("decode")
        }

        #[derive(Debug, Deserialize, PartialEq)]
        struct Payload {
            value: u32,
        }

        let envelope: ApiEnvelope<Payload> =
            decode(r#"{"success":true,"data":{"value":7}}"#);
        assert_eq!(envelope.data, Some(Payload { value: 7 }));

        let empty: ApiEnvelope<Payload> = decode(r#"{"success":true}"#);
        assert!(empty.data.is_none());
    }

    #[test]
    fn api_errors_are_not_transient() {
        let err = ClientError::Api(ApiErrorBody {
            code: "COMPANY_NOT_FOUND".into(),
            message: "unknown company".into(),
            details: None,
            status: Some(StatusCode::NOT_FOUND),
        });
        assert!(!err.is_transient());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn empty_body_is_transient() {
        let err = ClientError::EmptyResponse(StatusCode::BAD_GATEWAY);
        assert!(err.is_transient());
    }
}
