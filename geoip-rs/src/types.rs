use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

pub const MAX_RETRY_ATTEMPTS: u32 = 3;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Geo-IP services tried in this order when no other list is configured.
pub const DEFAULT_PROVIDERS: &[&str] = &[
    "https://api.ipdata.co/",
    "https://ipinfo.io/",
    "https://ipapi.co/",
    "https://freegeoip.app/json/",
    "https://api.ipgeolocation.io/ipgeo",
    "https://extreme-ip-lookup.com/json/",
    "https://ipwhois.app/json/",
];

#[derive(Debug, Clone)]
pub struct Config {
    /// Applied to every probe and every lookup attempt.
    pub timeout: Duration,
    /// Attempts per provider before it counts as a miss.
    pub max_retry_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_retry_attempts: MAX_RETRY_ATTEMPTS,
        }
    }
}

/// Base URL of a single geo-IP lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Provider {
    base_url: String,
}

impl Provider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The IP is appended as-is; providers are expected to take it as a trailing path segment.
    pub fn lookup_url(&self, ip: &str) -> String {
        format!("{}{}", self.base_url, ip)
    }

    pub fn defaults() -> Vec<Provider> {
        DEFAULT_PROVIDERS.iter().map(|url| Provider::new(*url)).collect()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}

impl From<&str> for Provider {
    fn from(base_url: &str) -> Self {
        Provider::new(base_url)
    }
}

impl From<String> for Provider {
    fn from(base_url: String) -> Self {
        Provider::new(base_url)
    }
}

/// One provider's JSON object, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpData(Map<String, Value>);

impl IpData {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Missing keys and `null` read as `None`. Nested values are rendered as compact JSON.
    pub fn field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for IpData {
    fn from(map: Map<String, Value>) -> Self {
        IpData(map)
    }
}
