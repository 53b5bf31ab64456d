use crate::client::GeoIp;
use crate::errors::GeoIpError;
use crate::types::{IpData, Provider};
use crate::utils::send_request;

#[cfg(feature = "tracing")]
use tracing::{instrument, warn};

impl GeoIp {
    /// Tries `providers` in order and returns the first non-empty result; later providers are
    /// not contacted. An empty object moves on to the next provider.
    ///
    /// Every provider gets its own retry budget and there is no overall deadline, so a query
    /// against unresponsive providers can take up to
    /// `providers.len() * max_retry_attempts * timeout`.
    #[cfg_attr(feature = "tracing", instrument(skip(self, providers), fields(providers = providers.len())))]
    pub async fn fetch(&self, providers: &[Provider], ip: &str) -> Option<IpData> {
        for provider in providers {
            match self.fetch_one(provider, ip).await {
                Some(data) if !data.is_empty() => return Some(data),
                _ => {}
            }
        }
        None
    }

    /// Up to `max_retry_attempts` back-to-back attempts against one provider.
    /// Returns `None` once they are all used up.
    pub async fn fetch_one(&self, provider: &Provider, ip: &str) -> Option<IpData> {
        let url = provider.lookup_url(ip);
        let mut attempt = 0;
        while attempt < self.config.max_retry_attempts {
            attempt += 1;
            match send_request(&self.http, &url).await {
                Ok(data) => return Some(data),
                Err(e) => report_failed_attempt(provider, attempt, &e),
            }
        }
        None
    }
}

#[cfg(feature = "tracing")]
fn report_failed_attempt(provider: &Provider, attempt: u32, err: &GeoIpError) {
    match err {
        GeoIpError::ApiError { status, .. } => {
            warn!(url = %provider, attempt, status = ?status, "Failed to fetch data from {provider}. Retrying...")
        }
        GeoIpError::Timeout { .. } => {
            warn!(url = %provider, attempt, "Timeout occurred while connecting to {provider}. Retrying...")
        }
        GeoIpError::HttpError(e) => {
            warn!(url = %provider, attempt, error = %e, "Failed to connect to {provider}. Retrying...")
        }
        GeoIpError::InvalidJson(e) => {
            warn!(url = %provider, attempt, error = %e, "Malformed response from {provider}. Retrying...")
        }
    }
}

#[cfg(not(feature = "tracing"))]
fn report_failed_attempt(_provider: &Provider, _attempt: u32, _err: &GeoIpError) {}
