use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use employee_report::cli;

fn main() -> Result<ExitCode> {
    init_logging();

    let status = cli::run(std::env::args_os(), &mut std::io::stdout().lock())?;
    Ok(status.into())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
