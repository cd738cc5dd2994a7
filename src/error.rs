use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: i64, height: i64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    #[error("mount point `{0}` does not exist")]
    MissingMountPoint(String),

    #[error("step trigger `{0}` does not exist")]
    MissingStepTrigger(String),

    #[error("unknown step `{0}`")]
    UnknownStep(String),
}
