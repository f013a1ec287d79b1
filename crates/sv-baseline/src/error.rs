use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BaselineError {
    #[error("package.json not found in repo root")]
    PackageJsonMissing,
    #[error("{0} not found")]
    AppDirMissing(PathBuf),
    #[error("No free port found")]
    NoFreePort,
    #[error("Command failed ({code}): {command}")]
    CommandFailed { command: String, code: i32 },
    #[error("failed to run '{command}': {source}")]
    CommandIo {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
