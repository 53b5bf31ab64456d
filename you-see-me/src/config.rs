use std::time::Duration;

use anyhow::{ensure, Context};
use config::{builder::DefaultState, ConfigBuilder, Environment, File};
use geoip_rs::types::{Config as ClientConfig, DEFAULT_PROVIDERS, DEFAULT_TIMEOUT, MAX_RETRY_ATTEMPTS};
use geoip_rs::Provider;
use serde::Deserialize;

const CONFIG_FILE: &str = "you-see-me.toml";

const ENV_PREFIX: &str = "YOU_SEE_ME";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub providers: Vec<String>,
    pub timeout_secs: u64,
    pub max_retry_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            providers: DEFAULT_PROVIDERS.iter().map(|url| url.to_string()).collect(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            max_retry_attempts: MAX_RETRY_ATTEMPTS,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("providers"),
            );

        Self::load(builder)
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Config> {
        let config: Config = builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.providers.is_empty(), "at least one provider must be configured");
        ensure!(self.timeout_secs > 0, "timeout_secs must be greater than zero");
        ensure!(
            self.max_retry_attempts > 0,
            "max_retry_attempts must be greater than zero"
        );
        Ok(())
    }

    pub fn providers(&self) -> Vec<Provider> {
        self.providers.iter().map(|url| Provider::new(url.trim())).collect()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            max_retry_attempts: self.max_retry_attempts,
        }
    }
}
