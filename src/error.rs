use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or validating the input table
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Cannot open input file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file has no header row")]
    Empty,

    #[error("Missing required columns in CSV: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Failures while persisting the report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Cannot write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("Chart rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
