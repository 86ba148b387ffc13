use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8600/api/v1";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Where the hierarchy page gets its Organization from. `Fixture` keeps the
/// portal usable without a running backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataSource {
    Fixture,
    Remote,
}

impl DataSource {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("remote") | Some("api") => Self::Remote,
            _ => Self::Fixture,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub company_id: Option<String>,
    pub auth_token: Option<String>,
    pub data_source: DataSource,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            company_id: None,
            auth_token: None,
            data_source: DataSource::Fixture,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        let mut config = Self::default();

        if let Some(url) = read_env("FITLINK_API_BASE_URL") {
            config.api_base_url = url;
        }

        if let Some(company) = read_env("FITLINK_COMPANY_ID") {
            config.company_id = Some(company);
        }

        if let Some(token) = read_env("FITLINK_AUTH_TOKEN") {
            config.auth_token = Some(token);
        }

        config.data_source = DataSource::from_env(read_env("FITLINK_DATA_SOURCE"));

        if let Some(secs) =
            read_env("FITLINK_REQUEST_TIMEOUT_SECS").and_then(|value| value.parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        config
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.auth_token
            .as_ref()
            .map(|token| format!("Bearer {}", token.trim()))
    }

    pub fn company_header<'a>(&'a self, override_company: Option<&'a str>) -> Option<String> {
        override_company
            .or(self.company_id.as_deref())
            .map(|value| value.to_string())
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "FITLINK_API_BASE_URL" => option_env!("FITLINK_API_BASE_URL"),
        "FITLINK_COMPANY_ID" => option_env!("FITLINK_COMPANY_ID"),
        "FITLINK_AUTH_TOKEN" => option_env!("FITLINK_AUTH_TOKEN"),
        "FITLINK_DATA_SOURCE" => option_env!("FITLINK_DATA_SOURCE"),
        "FITLINK_REQUEST_TIMEOUT_SECS" => option_env!("FITLINK_REQUEST_TIMEOUT_SECS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_defaults_to_fixture() {
        assert_eq!(DataSource::from_env(None), DataSource::Fixture);
        assert_eq!(
            DataSource::from_env(Some("anything".into())),
            DataSource::Fixture
        );
    }

    #[test]
    fn data_source_accepts_remote_aliases() {
        assert_eq!(DataSource::from_env(Some("remote".into())), DataSource::Remote);
        assert_eq!(DataSource::from_env(Some("api".into())), DataSource::Remote);
    }

    #[test]
    fn company_header_prefers_override() {
        let config = AppConfig {
            company_id: Some("acme".into()),
            ..AppConfig::default()
        };
        assert_eq!(config.company_header(Some("globex")), Some("globex".into()));
        assert_eq!(config.company_header(None), Some("acme".into()));
    }
}
