mod app;

use std::process::ExitCode;

use tracing::{error, info};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Arguments are echoed for diagnostics only.
    for (i, arg) in std::env::args().enumerate().skip(1) {
        info!("arg[{i}]: {arg}");
    }

    info!("Starting fractals");

    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
