pub mod client;
pub mod errors;
pub mod fetch;
pub mod probe;
pub mod types;
pub mod utils;

pub use client::GeoIp;
pub use types::{IpData, Provider, DEFAULT_PROVIDERS, MAX_RETRY_ATTEMPTS};
