use std::time::Duration;

use crate::types::{CheckReply, CheckRequest, LookupError, LookupFailureKind};

/// Path of the check endpoint under the configured base URL.
pub const CHECK_AS_PATH: &str = "/check_as";

#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// Base URL of the backend answering the check endpoint.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait LookupClient: Send + Sync {
    /// Checks one AS number against the backend.
    async fn check(&self, asn: &str) -> Result<CheckReply, LookupError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestLookupClient {
    settings: LookupSettings,
}

impl ReqwestLookupClient {
    pub fn new(settings: LookupSettings) -> Self {
        Self { settings }
    }

    fn check_url(&self) -> Result<reqwest::Url, LookupError> {
        let raw = format!(
            "{}{}",
            self.settings.endpoint.trim_end_matches('/'),
            CHECK_AS_PATH
        );
        reqwest::Url::parse(&raw)
            .map_err(|err| LookupError::new(LookupFailureKind::InvalidUrl, err.to_string()))
    }

    fn build_client(&self) -> Result<reqwest::Client, LookupError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| LookupError::new(LookupFailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl LookupClient for ReqwestLookupClient {
    async fn check(&self, asn: &str) -> Result<CheckReply, LookupError> {
        let url = self.check_url()?;
        let client = self.build_client()?;
        let request = CheckRequest {
            asn: asn.to_string(),
        };

        let response = client.post(url).json(&request).send().await.map_err(|err| {
            if err.is_timeout() {
                LookupError::new(LookupFailureKind::Timeout, err.to_string())
            } else {
                LookupError::new(LookupFailureKind::Network, err.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::new(
                LookupFailureKind::HttpStatus(status.as_u16()),
                format!("check endpoint answered {status}"),
            ));
        }

        response.json::<CheckReply>().await.map_err(|err| {
            if err.is_timeout() {
                LookupError::new(LookupFailureKind::Timeout, err.to_string())
            } else {
                LookupError::new(LookupFailureKind::Decode, err.to_string())
            }
        })
    }
}
