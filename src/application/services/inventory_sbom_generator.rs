use crate::ports::outbound::CommandRunner;
use crate::sbom_generation::domain::{CommandSpec, DocumentFormat, PackageList, SbomSchema};
use crate::sbom_generation::services::CommandBuilder;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

const INVENTORY_PREFIX: &str = "distro-sbom-";
const INVENTORY_SUFFIX: &str = ".txt";

/// InventorySbomGenerator - converts a package inventory into an SBOM
///
/// The inventory is staged in a temporary file owned by a
/// [`NamedTempFile`] guard. The file is removed when the guard drops, which
/// happens on every return path of [`generate`](Self::generate).
pub struct InventorySbomGenerator<'a, R> {
    runner: &'a R,
    temp_dir: Option<PathBuf>,
}

impl<'a, R: CommandRunner> InventorySbomGenerator<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self {
            runner,
            temp_dir: None,
        }
    }

    /// Stages inventory files in `temp_dir` instead of the system temp directory
    pub fn with_temp_dir(mut self, temp_dir: Option<PathBuf>) -> Self {
        self.temp_dir = temp_dir;
        self
    }

    /// Runs the conversion tool against `package_list`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The temporary inventory file cannot be created or written
    /// - The conversion tool cannot be spawned
    /// - The conversion tool exits non-zero ([`SbomError::GenerationFailed`], with its stderr)
    pub fn generate(
        &self,
        package_list: &PackageList,
        output_path: &Path,
        schema: SbomSchema,
        format: DocumentFormat,
    ) -> Result<()> {
        self.generate_with(package_list, output_path, schema, format, |_| {})
    }

    /// Same as [`generate`](Self::generate), handing the conversion command
    /// to `on_start` right before it runs
    pub fn generate_with<F>(
        &self,
        package_list: &PackageList,
        output_path: &Path,
        schema: SbomSchema,
        format: DocumentFormat,
        on_start: F,
    ) -> Result<()>
    where
        F: FnOnce(&CommandSpec),
    {
        let inventory = self.stage_inventory(package_list)?;

        let command = CommandBuilder::conversion(inventory.path(), output_path, schema, format);
        on_start(&command);
        let output = self.runner.run(&command)?;

        if !output.success() {
            return Err(SbomError::GenerationFailed {
                command: command.to_string(),
                stderr: output.stderr,
            }
            .into());
        }

        Ok(())
    }

    fn stage_inventory(&self, package_list: &PackageList) -> Result<NamedTempFile> {
        let mut builder = Builder::new();
        builder.prefix(INVENTORY_PREFIX).suffix(INVENTORY_SUFFIX);

        let created = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        let mut inventory = created.map_err(|e| SbomError::FileWriteError {
            path: self
                .temp_dir
                .clone()
                .unwrap_or_else(std::env::temp_dir),
            details: format!("Failed to create temporary inventory file: {}", e),
        })?;

        let path = inventory.path().to_path_buf();
        inventory
            .write_all(package_list.as_bytes())
            .and_then(|_| inventory.flush())
            .map_err(|e| SbomError::FileWriteError {
                path,
                details: e.to_string(),
            })?;

        Ok(inventory)
    }
}
