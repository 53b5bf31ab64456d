use geoip_rs::{IpData, Provider};

/// Everything the user sees goes through here, so the lookup core never
/// deals with terminal formatting.
pub trait Presenter: Send + Sync {
    fn banner(&self);
    fn provider_status(&self, provider: &Provider, reachable: bool);
    fn no_providers(&self);
    fn prompt(&self);
    fn empty_input(&self);
    fn ip_data(&self, data: Option<&IpData>);
    fn interrupted(&self);
}
