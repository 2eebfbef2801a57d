//! Runs the assembled command as a child process and reports how it ended.

use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::command::CommandSpec;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to run {program}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} error: {code}")]
    Failed { program: String, code: i32 },

    #[error("{program} was terminated by signal {signal}")]
    Signaled { program: String, signal: i32 },
}

/// Run `spec` with inherited stdio and block until it exits.
pub fn run(spec: &CommandSpec) -> Result<(), InvokeError> {
    log::debug!("spawning {}", spec.program);
    let status = Command::new(&spec.program)
        .args(&spec.args)
        .status()
        .map_err(|source| InvokeError::Launch {
            program: spec.program.clone(),
            source,
        })?;
    check_status(&spec.program, status)
}

fn check_status(program: &str, status: ExitStatus) -> Result<(), InvokeError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(InvokeError::Failed {
            program: program.to_string(),
            code,
        }),
        None => Err(InvokeError::Signaled {
            program: program.to_string(),
            signal: signal_of(status),
        }),
    }
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or(-1)
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> i32 {
    -1
}
