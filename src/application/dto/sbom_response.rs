use crate::sbom_generation::domain::PackageManager;
use std::path::PathBuf;

/// SbomResponse - outcome of a successful SBOM generation
///
/// The SBOM content itself is never read back; only where it went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomResponse {
    /// Path the external tool wrote the SBOM to
    pub output_path: PathBuf,
    /// Package manager detected or requested (`Unknown` is informational)
    pub package_manager: PackageManager,
}

impl SbomResponse {
    pub fn new(output_path: PathBuf, package_manager: PackageManager) -> Self {
        Self {
            output_path,
            package_manager,
        }
    }
}
