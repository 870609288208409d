//! Error type shared by every configurator

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error while scanning {}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no ID= field found in {}", path.display())]
    IdNotFound { path: PathBuf },

    #[error("Linux distribution not supported for automatic security updates: {0}")]
    UnsupportedDistribution(String),

    #[error("unsupported operating system: {0}")]
    UnsupportedOs(String),

    #[error("failed to run {program}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} {}", exit_detail(.code))]
    ExitStatus { program: String, code: Option<i32> },

    #[error("could not read {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not create temporary update script")]
    TempScript(#[source] io::Error),

    #[error("{step} failed")]
    Step {
        step: String,
        #[source]
        source: Box<Error>,
    },
}

/// Coarse grouping used when reporting a failure to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Detection,
    UnsupportedPlatform,
    Execution,
    Io,
}

impl Error {
    pub fn step(step: impl Into<String>, source: Error) -> Self {
        Error::Step {
            step: step.into(),
            source: Box::new(source),
        }
    }

    /// Innermost error, skipping any step wrappers
    pub fn root(&self) -> &Error {
        match self {
            Error::Step { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Step { source, .. } => source.category(),
            Error::Read { .. } | Error::Scan { .. } | Error::IdNotFound { .. } => {
                ErrorCategory::Detection
            }
            Error::UnsupportedDistribution(_) | Error::UnsupportedOs(_) => {
                ErrorCategory::UnsupportedPlatform
            }
            Error::Launch { .. } | Error::ExitStatus { .. } => ErrorCategory::Execution,
            Error::ReadConfig { .. } | Error::Write { .. } | Error::TempScript(_) => {
                ErrorCategory::Io
            }
        }
    }
}

fn exit_detail(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("failed with exit code {}", code),
        None => "was terminated by signal".to_string(),
    }
}
