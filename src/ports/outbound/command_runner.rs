use crate::sbom_generation::domain::{CommandOutput, CommandSpec};
use crate::shared::Result;
use std::path::Path;

/// CommandRunner port for executing external commands
///
/// Every call blocks until the child process exits. A non-zero exit status
/// is not an error at this level; callers inspect [`CommandOutput`].
pub trait CommandRunner {
    /// Runs a command, capturing stdout and stderr as text
    ///
    /// # Errors
    /// Returns an error if the process cannot be spawned or waited on
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput>;

    /// Runs a command with stdout redirected into `destination`
    ///
    /// The destination is created (or truncated) before the command starts.
    /// The returned output has an empty `stdout`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination file cannot be created
    /// - The process cannot be spawned or waited on
    fn run_to_file(&self, command: &CommandSpec, destination: &Path) -> Result<CommandOutput>;
}
