use crate::errors::GeoIpError;
use crate::types::Config;
use reqwest::Client;
use std::sync::Arc;

const USER_AGENT: &str = concat!("geoip-rs/", env!("CARGO_PKG_VERSION"));

/// Shared handle for probing and querying providers. Cloning reuses the same
/// connection pool.
#[derive(Clone)]
pub struct GeoIp {
    pub(crate) http: Client,
    pub config: Arc<Config>,
}

impl GeoIp {
    pub fn init(config: Option<Config>) -> Result<Self, GeoIpError> {
        let config = Arc::new(config.unwrap_or_default());
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn max_retry_attempts(&self) -> u32 {
        self.config.max_retry_attempts
    }
}
