//! Mock DataMall client for running without an account key.
//!
//! Loads sample `BusArrivalv2` responses from JSON files and serves them
//! as if they were live API responses.

use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;

use crate::board::ArrivalSource;
use crate::domain::BusStopCode;

use super::error::DataMallError;
use super::types::BusArrivalResponse;

/// Mock DataMall client that serves canned responses.
#[derive(Clone, Default)]
pub struct MockDataMallClient {
    /// Responses keyed by stop code.
    responses: Arc<RwLock<HashMap<BusStopCode, BusArrivalResponse>>>,
    /// Number of fetches served or refused.
    fetches: Arc<AtomicUsize>,
}

impl MockDataMallClient {
    /// Create an empty mock; every fetch fails until a response is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock by loading JSON files from a directory.
    ///
    /// Expects files named `{code}.json` (e.g. `83139.json`).
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, DataMallError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            DataMallError::Mock(format!("failed to read {}: {e}", data_dir.display()))
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| DataMallError::Mock(format!("failed to read directory entry: {e}")))?
                .path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let code: BusStopCode = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| DataMallError::Mock(format!("invalid filename: {}", path.display())))?
                .parse()
                .map_err(|e| DataMallError::Mock(format!("{}: {e}", path.display())))?;

            let json = std::fs::read_to_string(&path)
                .map_err(|e| DataMallError::Mock(format!("failed to read {}: {e}", path.display())))?;

            let response: BusArrivalResponse =
                serde_json::from_str(&json).map_err(|e| DataMallError::Json {
                    message: format!("{}: {e}", path.display()),
                    body: None,
                })?;

            responses.insert(code, response);
        }

        if responses.is_empty() {
            return Err(DataMallError::Mock(format!(
                "no mock response files found in {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            responses: Arc::new(RwLock::new(responses)),
            fetches: Arc::default(),
        })
    }

    /// Serve `response` for `code` from now on.
    pub async fn set_response(&self, code: BusStopCode, response: BusArrivalResponse) {
        self.responses.write().await.insert(code, response);
    }

    /// Make fetches for `code` fail from now on.
    pub async fn remove_response(&self, code: BusStopCode) {
        self.responses.write().await.remove(&code);
    }

    /// Stops with a canned response.
    pub async fn available_stops(&self) -> Vec<BusStopCode> {
        let mut codes: Vec<_> = self.responses.read().await.keys().copied().collect();
        codes.sort();
        codes
    }

    /// Total number of fetches attempted.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Mimics `DataMallClient::bus_arrivals`.
    pub async fn bus_arrivals(
        &self,
        code: BusStopCode,
    ) -> Result<BusArrivalResponse, DataMallError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.responses
            .read()
            .await
            .get(&code)
            .cloned()
            .ok_or_else(|| DataMallError::Mock(format!("no mock response for stop {code}")))
    }
}

impl ArrivalSource for MockDataMallClient {
    fn fetch(
        &self,
        code: BusStopCode,
    ) -> impl Future<Output = Result<BusArrivalResponse, DataMallError>> + Send {
        self.bus_arrivals(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BODY: &str = r#"{"BusStopCode": "83139", "Services": [{"ServiceNo": "15"}]}"#;

    #[tokio::test]
    async fn load_from_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("83139.json"), BODY).unwrap();
        std::fs::write(dir.path().join("README.txt"), "ignored").unwrap();

        let client = MockDataMallClient::from_dir(dir.path()).unwrap();
        assert_eq!(client.available_stops().await, vec![BusStopCode::new(83139)]);

        let response = client.bus_arrivals(BusStopCode::new(83139)).await.unwrap();
        assert_eq!(response.services[0].service_no, "15");
        assert_eq!(client.fetch_count(), 1);
    }

    #[tokio::test]
    async fn load_bundled_sample() {
        let client = MockDataMallClient::from_dir("data/mock").unwrap();
        let code = BusStopCode::new(83139);

        let response = client.bus_arrivals(code).await.unwrap();
        let stop = crate::domain::Stop::new(code, crate::domain::StopStyle::Plain);
        let arrivals =
            crate::datamall::arrivals_from_response(&stop, &response, chrono::Utc::now()).unwrap();

        // Two estimates for 15, one for 155; the empty NextBus3 is skipped.
        assert_eq!(arrivals.len(), 3);
    }

    #[tokio::test]
    async fn unknown_stop_returns_error() {
        let client = MockDataMallClient::new();
        let result = client.bus_arrivals(BusStopCode::new(1)).await;
        assert!(matches!(result, Err(DataMallError::Mock(_))));
        assert_eq!(client.fetch_count(), 1);
    }

    #[test]
    fn empty_dir_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(MockDataMallClient::from_dir(dir.path()).is_err());
    }

    #[test]
    fn bad_filename_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("home.json"), BODY).unwrap();
        assert!(MockDataMallClient::from_dir(dir.path()).is_err());
    }

    #[tokio::test]
    async fn set_and_remove_response() {
        let client = MockDataMallClient::new();
        let code = BusStopCode::new(83139);
        client
            .set_response(code, serde_json::from_str(BODY).unwrap())
            .await;
        assert!(client.bus_arrivals(code).await.is_ok());

        client.remove_response(code).await;
        assert!(client.bus_arrivals(code).await.is_err());
    }
}
