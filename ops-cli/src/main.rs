use clap::Parser;
use error_common::TransportError;
use ops_cli::{Cli, Outcome};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init_logging(&cli.logger_config()).map_err(TransportError::from)?;

    let mut stdout = std::io::stdout().lock();
    let outcome = ops_cli::run(&cli, &mut stdout).map_err(|err| {
        error_common::log_error("transport", &err);
        err
    })?;

    Ok(match outcome {
        Outcome::Accepted => ExitCode::SUCCESS,
        Outcome::Rejected => ExitCode::from(2),
    })
}
