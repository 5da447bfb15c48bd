//! Command-line entry point, kept in the library so the console contract is testable.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::{count_message, saved_message, EmployeeReport, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "employee-report")]
#[command(author, version, about = "Department distribution report for employee CSV files")]
pub struct Cli {
    /// Path to the employee CSV file
    #[arg(value_name = "employees.csv")]
    pub input: PathBuf,
}

/// How a run that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Usage,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Usage => ExitCode::FAILURE,
        }
    }
}

pub fn usage_message() -> String {
    format!("Usage: {} <employees.csv>", Cli::command().get_name())
}

/// Parse `args`, build the report at [`DEFAULT_OUTPUT`] and print the console lines to `out`
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<RunStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    run_with_output(args, out, Path::new(DEFAULT_OUTPUT))
}

/// Like [`run`], writing the report to `output_path`
pub fn run_with_output<I, T, W>(args: I, out: &mut W, output_path: &Path) -> Result<RunStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            writeln!(out, "{}", usage_message())?;
            return Ok(RunStatus::Usage);
        }
        Err(err) => err.exit(),
    };

    let report = EmployeeReport::load(&cli.input)?;
    let summary = report.summary();
    writeln!(out, "{}", count_message(summary.target_count))?;

    let outcome = report.generate_from(&summary, output_path)?;
    writeln!(out, "{}", saved_message(&outcome.output_path))?;

    Ok(RunStatus::Success)
}
