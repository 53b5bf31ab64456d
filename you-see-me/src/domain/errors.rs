use geoip_rs::errors::GeoIpError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No accessible API URLs found")]
    NoReachableProviders,
    #[error("GeoIP client error: {0}")]
    GeoIpError(#[from] GeoIpError),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
