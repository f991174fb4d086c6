use crate::ports::outbound::CommandRunner;
use crate::sbom_generation::domain::{CommandOutput, CommandSpec};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs::File;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// ProcessRunner adapter running commands as blocking child processes
///
/// Programs are resolved through the search path of the current process.
/// Output is decoded lossily as UTF-8.
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(command: &CommandSpec) -> Command {
        let mut process = Command::new(command.program());
        process.args(command.args());
        process
    }

    fn spawn_error(command: &CommandSpec, error: std::io::Error) -> anyhow::Error {
        SbomError::CommandSpawnFailed {
            command: command.to_string(),
            details: error.to_string(),
        }
        .into()
    }

    fn to_command_output(output: Output) -> CommandOutput {
        CommandOutput::new(
            output.status.code(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
        let output = Self::build(command)
            .output()
            .map_err(|e| Self::spawn_error(command, e))?;

        Ok(Self::to_command_output(output))
    }

    fn run_to_file(&self, command: &CommandSpec, destination: &Path) -> Result<CommandOutput> {
        let file = File::create(destination).map_err(|e| SbomError::FileWriteError {
            path: destination.to_path_buf(),
            details: e.to_string(),
        })?;

        let output = Self::build(command)
            .stdin(Stdio::null())
            .stdout(Stdio::from(file))
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Self::spawn_error(command, e))?;

        Ok(Self::to_command_output(output))
    }
}
