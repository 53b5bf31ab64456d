use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoIpError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Provider returned error ({status}): {body}")]
    ApiError {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid JSON in provider response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl GeoIpError {
    /// Timeouts surface as their own variant so callers can word the warning differently.
    pub(crate) fn from_request(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            GeoIpError::Timeout {
                url: url.to_string(),
            }
        } else {
            GeoIpError::HttpError(err)
        }
    }
}
