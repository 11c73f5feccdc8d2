//! DataMall client error types.

/// Errors from the DataMall HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DataMallError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by DataMall")]
    RateLimited,

    /// Invalid account key
    #[error("unauthorized: check API_KEY")]
    Unauthorized,

    /// Mock data could not be loaded or has no entry for the stop
    #[error("mock data: {0}")]
    Mock(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
