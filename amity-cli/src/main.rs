//! CLI entry point for the amity social-graph tool.
//!
//! Parses command-line arguments with clap, builds the requested network,
//! renders the report to stdout, and maps errors to exit codes. Logging is
//! initialised first so later stages can emit structured diagnostics via
//! `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use amity_core::NetworkError;
use amity_cli::{
    cli::{Cli, CliError, render_report, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the report, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let report = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_report(&report, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_failure(&err);
            ExitCode::FAILURE
        }
    }
}

/// Log `err` with the stable core error codes when the failure came from the
/// network itself.
fn log_failure(err: &anyhow::Error) {
    let core = err.downcast_ref::<CliError>().and_then(CliError::core);
    let code = core.map(|core| field::display(core.code().as_str()));
    let disjoint_set_code = core
        .and_then(NetworkError::disjoint_set_code)
        .map(|code| field::display(code.as_str()));

    error!(
        error = %err,
        code,
        disjoint_set_code,
        "command execution failed"
    );
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
