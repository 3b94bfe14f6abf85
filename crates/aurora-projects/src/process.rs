//! External command execution
//!
//! Setup tools (`npm`, `swift`) are awaited with their output streamed to
//! the terminal; the editor is launched detached.

use crate::error::{Error, Result};
use camino::Utf8Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Check whether an executable is on PATH
pub fn is_command_available(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

/// Run a command to completion in `cwd`, inheriting stdout/stderr.
///
/// A non-zero exit becomes `Error::CommandFailed`.
pub async fn run_command(program: &str, args: &[&str], cwd: &Utf8Path) -> Result<()> {
    let cmdline = command_line(program, args);

    if !is_command_available(program) {
        return Err(Error::command_not_found(program));
    }

    debug!("Running setup command: {} (in {})", cmdline, cwd);
    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await?;

    if !status.success() {
        return Err(Error::command_failed(cmdline, status.code().unwrap_or(-1)));
    }

    debug!("Command succeeded: {}", cmdline);
    Ok(())
}

/// Launch a command without waiting for it.
///
/// Only a failure to spawn is reported; the exit status is logged in the
/// background if the process finishes while the CLI is still running.
pub fn spawn_detached(program: &str, args: &[&str]) -> Result<()> {
    let cmdline = command_line(program, args);
    debug!("Launching: {}", cmdline);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::command_not_found(program),
            _ => Error::Io(e),
        })?;

    tokio::spawn(async move {
        match child.wait().await {
            Ok(status) if !status.success() => {
                warn!("{} exited with {}", cmdline, status);
            }
            Err(e) => warn!("Failed to wait for {}: {}", cmdline, e),
            _ => {}
        }
    });

    Ok(())
}

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
