// src/system/cargo.rs

use crate::{
    constants::{CARGO_PROGRAM, TIMINGS_FLAG},
    core::timings_parser::{self, TimingsError},
    models::{RunConfig, Timings},
    system::executor::{self, ExecutionError},
};
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CargoError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    Timings(#[from] TimingsError),
    #[error("Feature list {0:?} cannot be quoted into a command line.")]
    UnquotableFeatures(String),
}

/// `cargo +<toolchain> clean`.
pub fn clean_command_line(toolchain: &str) -> String {
    format!("{} +{} clean", CARGO_PROGRAM, toolchain)
}

/// `cargo +<toolchain> build -Z timings=json [--no-default-features] [--features=...]`.
pub fn build_command_line(toolchain: &str, config: &RunConfig) -> Result<String, CargoError> {
    let mut command_line = format!("{} +{} build {}", CARGO_PROGRAM, toolchain, TIMINGS_FLAG);
    if config.no_default_features {
        command_line.push_str(" --no-default-features");
    }
    if config.has_features() {
        let argument = format!("--features={}", config.features.trim());
        let quoted = shlex::try_quote(&argument)
            .map_err(|_| CargoError::UnquotableFeatures(config.features.clone()))?;
        command_line.push(' ');
        command_line.push_str(&quoted);
    }
    Ok(command_line)
}

/// Removes previous build artifacts so no target is served from cache.
/// Both output streams are discarded.
pub fn clean(project_root: &Path, toolchain: &str) -> Result<(), CargoError> {
    let command_line = clean_command_line(toolchain);
    log::info!("Cleaning {}", project_root.display());
    executor::execute_silently(&command_line, project_root)?;
    Ok(())
}

/// Builds the project with timing instrumentation and collects one record per target.
///
/// Blocks until the build exits. A malformed record kills the build and aborts;
/// so does a non-zero exit.
pub fn build(project_root: &Path, toolchain: &str, config: &RunConfig) -> Result<Timings, CargoError> {
    let command_line = build_command_line(toolchain, config)?;
    log::info!("Building: {}", command_line);
    let timings = collect_from_command(&command_line, project_root)?;
    log::info!("Collected timings for {} targets", timings.len());
    Ok(timings)
}

/// Runs `command_line` and decodes every line it prints as a timing record.
fn collect_from_command(command_line: &str, project_root: &Path) -> Result<Timings, CargoError> {
    let mut captured = executor::spawn_captured(command_line, project_root)?;
    let stdout = captured.take_stdout()?;

    match timings_parser::collect_timings(BufReader::new(stdout)) {
        Ok(timings) => {
            captured.wait()?;
            Ok(timings)
        }
        Err(e) => {
            captured.kill();
            Err(e.into())
        }
    }
}
