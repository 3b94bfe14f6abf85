//! CLI command implementations
//!
//! Every command runs through [`with_error_handling`], which turns errors
//! into user-facing messages and appends unanticipated ones to the error
//! log.

pub mod extension;
pub mod help;
pub mod profile;
pub mod project;

use anyhow::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::future::Future;
use std::io::{self, Write};
use std::path::Path;

use crate::output;

/// File unanticipated errors are appended to, relative to the working directory
pub const ERROR_LOG: &str = "error.log";

/// How a command failure is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The user aborted a prompt
    Cancelled,
    /// A prompt needed a terminal and there was none
    NoTerminal,
    /// A failure the commands anticipate (validation, collisions, missing files...)
    Expected,
    /// Anything else; logged to [`ERROR_LOG`]
    Unexpected,
}

/// Run a command, reporting rather than propagating its error
pub async fn with_error_handling<F>(command: F)
where
    F: Future<Output = Result<()>>,
{
    if let Err(err) = command.await {
        report(&err, Path::new(ERROR_LOG));
    }
}

/// Print an error according to its classification
pub fn report(err: &anyhow::Error, log_path: &Path) {
    match classify(err) {
        Failure::Cancelled => output::warning("Operation cancelled by the user."),
        Failure::NoTerminal => {
            output::error("Prompt couldn't be rendered in the current environment.")
        }
        Failure::Expected => output::error(&format!("{:#}", err)),
        Failure::Unexpected => {
            output::error(&format!("An unexpected error occurred: {:#}", err));
            if let Err(log_err) = append_error_log(log_path, err) {
                tracing::warn!("Failed to write {}: {}", log_path.display(), log_err);
            }
        }
    }
}

/// Classify an error by walking its cause chain
pub fn classify(err: &anyhow::Error) -> Failure {
    for cause in err.chain() {
        if let Some(core) = cause.downcast_ref::<aurora_core::Error>() {
            match core {
                aurora_core::Error::Cancelled => return Failure::Cancelled,
                aurora_core::Error::Io(io_err) => {
                    if let Some(failure) = classify_io(io_err) {
                        return failure;
                    }
                }
                other if other.is_expected() => return Failure::Expected,
                _ => {}
            }
        } else if let Some(project) = cause.downcast_ref::<aurora_projects::Error>() {
            if let aurora_projects::Error::Core(aurora_core::Error::Cancelled) = project {
                return Failure::Cancelled;
            }
            if project.is_expected() {
                return Failure::Expected;
            }
        } else if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if let Some(failure) = classify_io(io_err) {
                return failure;
            }
        }
    }
    Failure::Unexpected
}

fn classify_io(err: &io::Error) -> Option<Failure> {
    match err.kind() {
        io::ErrorKind::Interrupted => Some(Failure::Cancelled),
        io::ErrorKind::NotConnected => Some(Failure::NoTerminal),
        _ => None,
    }
}

/// Append `[<ISO-8601 timestamp>] <error with causes>` to the log
pub fn append_error_log(path: &Path, err: &anyhow::Error) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "[{}] {:#}",
        Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        err
    )
}
