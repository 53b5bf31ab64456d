use geoip_rs::{IpData, Provider};
use std::future::Future;

pub trait LookupRepository: Send + Sync + 'static {
    /// Candidate providers, in preference order.
    fn providers(&self) -> &[Provider];
    fn probe<F>(
        &self,
        providers: &[Provider],
        on_status: F,
    ) -> impl Future<Output = Vec<Provider>> + Send
    where
        F: FnMut(&Provider, bool) + Send;
    fn fetch(
        &self,
        providers: &[Provider],
        ip: &str,
    ) -> impl Future<Output = Option<IpData>> + Send;
}
