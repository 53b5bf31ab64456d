use geoip_rs::Provider;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    application::services::lookup_service::LookupService,
    domain::{
        errors::AppError,
        ports::{lookup::LookupRepository, presenter::Presenter},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Empty,
    Lookup(String),
}

pub fn parse_command(line: &str) -> Command {
    let input = line.trim();
    if input.eq_ignore_ascii_case("exit") {
        Command::Exit
    } else if input.is_empty() {
        Command::Empty
    } else {
        Command::Lookup(input.to_string())
    }
}

/// Reads one IP per line until `exit` or end of input. Each result is shown and then dropped.
/// Lines are decoded lossily so stray bytes end up as an unknown lookup, not a failed session.
pub async fn run<R, P, I>(
    service: &LookupService<R>,
    presenter: &P,
    reachable: &[Provider],
    mut input: I,
) -> Result<(), AppError>
where
    R: LookupRepository,
    P: Presenter,
    I: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    loop {
        presenter.prompt();
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            tracing::debug!("Input closed");
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        match parse_command(&line) {
            Command::Exit => break,
            Command::Empty => presenter.empty_input(),
            Command::Lookup(ip) => {
                let data = service.lookup(reachable, &ip).await;
                presenter.ip_data(data.as_ref());
            }
        }
    }
    Ok(())
}
