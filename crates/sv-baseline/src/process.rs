//! External command execution with live output.

use std::path::Path;

use tokio::process::Command as TokioCommand;

use crate::error::BaselineError;

/// Render a program and its arguments as one shell-style line.
#[must_use]
pub fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Run a command from `root` with inherited stdio, echoing `> {command}`
/// first so the log reads like a shell session. Output streams through as
/// the command produces it.
///
/// # Errors
///
/// Returns [`BaselineError::CommandIo`] if the command cannot be spawned and
/// [`BaselineError::CommandFailed`] on a non-zero exit.
pub async fn run_streamed(root: &Path, program: &str, args: &[&str]) -> Result<(), BaselineError> {
    let command = command_line(program, args);
    println!("> {command}");
    let status = TokioCommand::new(program)
        .args(args)
        .current_dir(root)
        .status()
        .await
        .map_err(|source| BaselineError::CommandIo {
            command: command.clone(),
            source,
        })?;
    if !status.success() {
        return Err(BaselineError::CommandFailed {
            command,
            code: status.code().unwrap_or(-1),
        });
    }
    Ok(())
}
