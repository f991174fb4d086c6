use crate::ports::outbound::CommandRunner;
use crate::sbom_generation::domain::{PackageList, PackageManager};
use crate::sbom_generation::services::CommandBuilder;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// PackageLister - captures the installed package inventory
///
/// The listing command's stdout is returned untouched; nothing is parsed.
pub struct PackageLister<'a, R> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> PackageLister<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Runs the manager's listing command
    ///
    /// # Errors
    /// Returns an error if:
    /// - `manager` is `Unknown` ([`SbomError::UnsupportedPackageManager`])
    /// - The command cannot be spawned
    /// - The command exits non-zero ([`SbomError::ListingFailed`], with its stderr)
    pub fn list(&self, manager: PackageManager) -> Result<PackageList> {
        let command = CommandBuilder::listing(manager)?;
        let output = self.runner.run(&command)?;

        if !output.success() {
            return Err(SbomError::ListingFailed {
                command: command.to_string(),
                stderr: output.stderr,
            }
            .into());
        }

        Ok(PackageList::new(output.stdout))
    }
}
