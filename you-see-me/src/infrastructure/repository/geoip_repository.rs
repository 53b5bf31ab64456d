use geoip_rs::{GeoIp, IpData, Provider};

use crate::domain::{errors::AppError, ports::lookup::LookupRepository};

#[derive(Clone)]
pub struct GeoIpRepository {
    geoip: GeoIp,
    providers: Vec<Provider>,
}

impl GeoIpRepository {
    pub fn new(
        client_config: geoip_rs::types::Config,
        providers: Vec<Provider>,
    ) -> Result<Self, AppError> {
        let geoip = GeoIp::init(Some(client_config))?;
        Ok(Self { geoip, providers })
    }
}

impl LookupRepository for GeoIpRepository {
    fn providers(&self) -> &[Provider] {
        &self.providers
    }

    async fn probe<F>(&self, providers: &[Provider], on_status: F) -> Vec<Provider>
    where
        F: FnMut(&Provider, bool) + Send,
    {
        self.geoip.probe_with(providers, on_status).await
    }

    async fn fetch(&self, providers: &[Provider], ip: &str) -> Option<IpData> {
        self.geoip.fetch(providers, ip).await
    }
}
