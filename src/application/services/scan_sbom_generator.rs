use crate::ports::outbound::{CommandRunner, ExecutableLocator};
use crate::sbom_generation::domain::{CommandSpec, ScanOutputFormat};
use crate::sbom_generation::services::{CommandBuilder, SCAN_TOOL, SCAN_TOOL_INSTALL_HINT};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ScanSbomGenerator - produces an SBOM by scanning a directory with syft
///
/// The scanner writes the SBOM to stdout, which is redirected into the
/// destination file. A failed run leaves whatever was written in place.
pub struct ScanSbomGenerator<'a, L, R> {
    locator: &'a L,
    runner: &'a R,
}

impl<'a, L: ExecutableLocator, R: CommandRunner> ScanSbomGenerator<'a, L, R> {
    pub fn new(locator: &'a L, runner: &'a R) -> Self {
        Self { locator, runner }
    }

    /// Checks that the scanner is on the search path
    ///
    /// # Errors
    /// Returns [`SbomError::DependencyMissing`] with an installation hint
    pub fn ensure_available(&self) -> Result<PathBuf> {
        self.locator.locate(SCAN_TOOL).ok_or_else(|| {
            SbomError::DependencyMissing {
                tool: SCAN_TOOL.to_string(),
                install_hint: SCAN_TOOL_INSTALL_HINT.to_string(),
            }
            .into()
        })
    }

    /// Scans `target` and writes the SBOM to `output_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination cannot be created
    /// - The scanner cannot be spawned
    /// - The scanner exits non-zero ([`SbomError::GenerationFailed`], with its stderr)
    pub fn generate(
        &self,
        target: &Path,
        output_path: &Path,
        format: ScanOutputFormat,
    ) -> Result<()> {
        self.generate_with(target, output_path, format, |_| {})
    }

    /// Same as [`generate`](Self::generate), handing the scan command to
    /// `on_start` right before it runs
    pub fn generate_with<F>(
        &self,
        target: &Path,
        output_path: &Path,
        format: ScanOutputFormat,
        on_start: F,
    ) -> Result<()>
    where
        F: FnOnce(&CommandSpec),
    {
        let command = CommandBuilder::scan(target, format);
        on_start(&command);
        let output = self.runner.run_to_file(&command, output_path)?;

        if !output.success() {
            return Err(SbomError::GenerationFailed {
                command: command.to_string(),
                stderr: output.stderr,
            }
            .into());
        }

        Ok(())
    }
}
