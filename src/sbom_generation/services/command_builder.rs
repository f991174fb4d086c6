use crate::sbom_generation::domain::{
    CommandSpec, DocumentFormat, PackageManager, SbomSchema, ScanOutputFormat,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::ffi::OsString;
use std::path::Path;

/// Inventory-to-SBOM conversion tool
const CONVERSION_TOOL: &str = "distro2sbom";

/// Filesystem scanner
pub const SCAN_TOOL: &str = "syft";

pub const SCAN_TOOL_INSTALL_HINT: &str =
    "Please install syft from https://github.com/anchore/syft";

/// dpkg-query output format: one `name version` line per package
const DPKG_SHOW_FORMAT: &str = "-f=${Package} ${Version}\n";

/// CommandBuilder service for describing external tool invocations
///
/// Pure logic: builds [`CommandSpec`] values, never runs anything.
pub struct CommandBuilder;

impl CommandBuilder {
    /// Listing command for installed packages
    ///
    /// # Errors
    /// Returns [`SbomError::UnsupportedPackageManager`] for
    /// [`PackageManager::Unknown`]
    pub fn listing(manager: PackageManager) -> Result<CommandSpec> {
        match manager {
            PackageManager::Apt => Ok(CommandSpec::new("dpkg-query", ["-W", DPKG_SHOW_FORMAT])),
            PackageManager::Dnf => Ok(CommandSpec::new("dnf", ["list", "installed"])),
            PackageManager::Yum => Ok(CommandSpec::new("yum", ["list", "installed"])),
            PackageManager::Unknown => Err(SbomError::UnsupportedPackageManager {
                name: manager.to_string(),
            }
            .into()),
        }
    }

    /// distro2sbom invocation converting an inventory file into an SBOM
    pub fn conversion(
        input_file: &Path,
        output_file: &Path,
        schema: SbomSchema,
        format: DocumentFormat,
    ) -> CommandSpec {
        CommandSpec::new(
            CONVERSION_TOOL,
            [
                OsString::from("--input-file"),
                input_file.as_os_str().to_owned(),
                OsString::from("--sbom"),
                OsString::from(schema.to_string()),
                OsString::from("--format"),
                OsString::from(format.to_string()),
                OsString::from("--output-file"),
                output_file.as_os_str().to_owned(),
            ],
        )
    }

    /// syft invocation scanning a directory; the SBOM goes to stdout
    pub fn scan(target: &Path, format: ScanOutputFormat) -> CommandSpec {
        let mut source = OsString::from("dir:");
        source.push(target);

        CommandSpec::new(
            SCAN_TOOL,
            [
                source,
                OsString::from("--output"),
                OsString::from(format.to_string()),
            ],
        )
    }
}
