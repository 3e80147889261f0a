// EN: src/system/executor.rs

use std::path::Path;
use std::process::{Child, ChildStdout, Command as StdCommand, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command could not be parsed: {0}")]
    CommandParse(String),
    #[error("No command specified to run.")]
    EmptyCommand,
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    #[error("Command '{command}' exited with a non-zero status ({status}).")]
    NonZeroExitStatus { command: String, status: String },
    #[error("Command '{0}' did not expose its standard output.")]
    MissingStdout(String),
}

/// Splits a command line into program and arguments, shell-style.
fn split_command_line(command_line: &str) -> Result<(String, Vec<String>), ExecutionError> {
    let trimmed_command = command_line.trim();
    if trimmed_command.is_empty() {
        return Err(ExecutionError::EmptyCommand);
    }
    let mut parts = shlex::split(trimmed_command)
        .ok_or_else(|| ExecutionError::CommandParse(trimmed_command.to_string()))?
        .into_iter();
    let program = parts.next().ok_or(ExecutionError::EmptyCommand)?;
    Ok((program, parts.collect()))
}

fn prepare(command_line: &str, cwd: &Path) -> Result<StdCommand, ExecutionError> {
    let (program, args) = split_command_line(command_line)?;
    let mut command = StdCommand::new(program);
    command
        .args(args)
        .current_dir(dunce::simplified(cwd))
        .stdin(Stdio::null());
    Ok(command)
}

/// Runs a command to completion with both output streams discarded.
/// A missing executable or a non-zero exit is an error.
pub fn execute_silently(command_line: &str, cwd: &Path) -> Result<(), ExecutionError> {
    let command_line = command_line.trim();
    log::debug!("Executing '{}' in {}", command_line, cwd.display());

    let status = prepare(command_line, cwd)?
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| ExecutionError::CommandFailed(command_line.to_string(), e))?;

    if !status.success() {
        return Err(ExecutionError::NonZeroExitStatus {
            command: command_line.to_string(),
            status: status.to_string(),
        });
    }
    Ok(())
}

/// A child process whose standard output is piped back to us.
/// Stderr is discarded.
#[derive(Debug)]
pub struct CapturedCommand {
    command_line: String,
    child: Child,
}

impl CapturedCommand {
    /// Takes the child's stdout. Can only be done once.
    pub fn take_stdout(&mut self) -> Result<ChildStdout, ExecutionError> {
        self.child
            .stdout
            .take()
            .ok_or_else(|| ExecutionError::MissingStdout(self.command_line.clone()))
    }

    /// Waits for the process to exit. A non-zero exit is an error.
    pub fn wait(mut self) -> Result<(), ExecutionError> {
        // Drain unread output before waiting.
        if let Some(mut stdout) = self.child.stdout.take() {
            if let Err(e) = std::io::copy(&mut stdout, &mut std::io::sink()) {
                log::debug!("Failed to drain output of '{}': {}", self.command_line, e);
            }
        }
        let status = self
            .child
            .wait()
            .map_err(|e| ExecutionError::CommandFailed(self.command_line.clone(), e))?;
        if !status.success() {
            return Err(ExecutionError::NonZeroExitStatus {
                command: self.command_line,
                status: status.to_string(),
            });
        }
        Ok(())
    }

    /// Kills the process and reaps it.
    pub fn kill(mut self) {
        log::debug!(
            "Killing child process (PID: {}) '{}'",
            self.child.id(),
            self.command_line
        );
        if let Err(e) = self.child.kill() {
            log::warn!("Failed to kill child process {}: {}", self.child.id(), e);
        }
        self.child.wait().ok();
    }
}

/// Spawns a command with stdout piped and stderr discarded.
pub fn spawn_captured(command_line: &str, cwd: &Path) -> Result<CapturedCommand, ExecutionError> {
    let command_line = command_line.trim();
    log::debug!("Spawning '{}' in {}", command_line, cwd.display());

    let child = prepare(command_line, cwd)?
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ExecutionError::CommandFailed(command_line.to_string(), e))?;

    Ok(CapturedCommand {
        command_line: command_line.to_string(),
        child,
    })
}
