pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::process::ExitCode;

use adapters::terminal::TerminalPresenter;
use application::services::lookup_service::LookupService;
use domain::{errors::AppError, ports::presenter::Presenter};
use infrastructure::repository::geoip_repository::GeoIpRepository;

const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::from_env()?;
    let repo = GeoIpRepository::new(config.client_config(), config.providers())?;
    let service = LookupService::new(repo);
    let presenter = TerminalPresenter::new();

    presenter.banner();

    // Dropping the session future abandons whatever request is in flight.
    tokio::select! {
        result = run_session(&service, &presenter) => match result {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(AppError::NoReachableProviders) => {
                presenter.no_providers();
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        },
        _ = tokio::signal::ctrl_c() => {
            presenter.interrupted();
            // Runtime shutdown would otherwise wait on the blocking stdin read.
            std::process::exit(EXIT_INTERRUPTED);
        }
    }
}

async fn run_session(
    service: &LookupService<GeoIpRepository>,
    presenter: &TerminalPresenter,
) -> Result<(), AppError> {
    let reachable = service.probe(presenter).await?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    adapters::console::run(service, presenter, &reachable, stdin).await
}
