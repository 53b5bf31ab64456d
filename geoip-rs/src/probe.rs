use crate::client::GeoIp;
use crate::types::Provider;
use crate::utils::check_status;
use reqwest::StatusCode;

#[cfg(feature = "tracing")]
use tracing::{info, warn};

impl GeoIp {
    /// One best-effort GET against the provider's base URL; only a 200 counts.
    pub async fn check_access(&self, provider: &Provider) -> bool {
        match check_status(&self.http, provider.base_url()).await {
            Ok(status) if status == StatusCode::OK => true,
            Ok(_status) => {
                #[cfg(feature = "tracing")]
                warn!(url = %provider, status = ?_status, "Provider rejected probe");
                false
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                warn!(url = %provider, error = %_e, "Provider unreachable");
                false
            }
        }
    }

    /// Probes providers one at a time and keeps the reachable ones in their original order.
    pub async fn probe(&self, providers: &[Provider]) -> Vec<Provider> {
        self.probe_with(providers, |_, _| {}).await
    }

    /// Like [`GeoIp::probe`], reporting each outcome to `on_status` as soon as it is known.
    pub async fn probe_with<F>(&self, providers: &[Provider], mut on_status: F) -> Vec<Provider>
    where
        F: FnMut(&Provider, bool),
    {
        let mut reachable = Vec::with_capacity(providers.len());
        for provider in providers {
            let ok = self.check_access(provider).await;
            on_status(provider, ok);
            if ok {
                reachable.push(provider.clone());
            }
        }

        #[cfg(feature = "tracing")]
        info!(
            reachable = reachable.len(),
            total = providers.len(),
            "Provider probing finished"
        );

        reachable
    }
}
