//! DataMall HTTP client.
//!
//! Provides async access to the `BusArrivalv2` endpoint. Handles
//! authentication and maps HTTP failures onto [`DataMallError`].

use std::future::Future;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};

use crate::board::ArrivalSource;
use crate::domain::BusStopCode;

use super::error::DataMallError;
use super::types::BusArrivalResponse;

/// Default base URL for the DataMall API.
const DEFAULT_BASE_URL: &str = "http://datamall2.mytransport.sg/ltaodataservice";

/// Default request timeout. A hung request would otherwise stall its
/// stop's updates forever.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the DataMall client.
#[derive(Debug, Clone)]
pub struct DataMallConfig {
    /// Account key sent in the `AccountKey` header
    pub api_key: String,
    /// Base URL for the API (defaults to production DataMall)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DataMallConfig {
    /// Create a new config with the given account key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// DataMall API client.
#[derive(Debug, Clone)]
pub struct DataMallClient {
    http: reqwest::Client,
    base_url: String,
}

impl DataMallClient {
    /// Create a new DataMall client with the given configuration.
    pub fn new(config: DataMallConfig) -> Result<Self, DataMallError> {
        let mut headers = HeaderMap::new();

        let account_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| DataMallError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
        headers.insert(HeaderName::from_static("accountkey"), account_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the next-bus estimates for every service at a stop.
    pub async fn bus_arrivals(
        &self,
        code: BusStopCode,
    ) -> Result<BusArrivalResponse, DataMallError> {
        let url = format!("{}/BusArrivalv2", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("BusStopCode", code.to_string())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DataMallError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DataMallError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataMallError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| DataMallError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl ArrivalSource for DataMallClient {
    fn fetch(
        &self,
        code: BusStopCode,
    ) -> impl Future<Output = Result<BusArrivalResponse, DataMallError>> + Send {
        self.bus_arrivals(code)
    }
}
