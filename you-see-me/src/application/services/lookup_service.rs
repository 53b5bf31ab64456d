use geoip_rs::{IpData, Provider};

use crate::domain::{
    errors::AppError,
    ports::{lookup::LookupRepository, presenter::Presenter},
};

#[derive(Clone)]
pub struct LookupService<R: LookupRepository> {
    repo: R,
}

impl<R: LookupRepository> LookupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Runs once per session. An empty result ends the session.
    pub async fn probe<P: Presenter>(&self, presenter: &P) -> Result<Vec<Provider>, AppError> {
        let reachable = self
            .repo
            .probe(self.repo.providers(), |provider, ok| {
                presenter.provider_status(provider, ok)
            })
            .await;
        if reachable.is_empty() {
            return Err(AppError::NoReachableProviders);
        }
        Ok(reachable)
    }

    #[tracing::instrument(skip(self, reachable))]
    pub async fn lookup(&self, reachable: &[Provider], ip: &str) -> Option<IpData> {
        let data = self.repo.fetch(reachable, ip).await;
        if data.is_none() {
            tracing::info!("No provider returned data");
        }
        data
    }
}
