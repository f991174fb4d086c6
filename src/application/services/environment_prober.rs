use crate::ports::outbound::ExecutableLocator;
use crate::sbom_generation::domain::PackageManager;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// EnvironmentProber - detects the host's package manager
///
/// Probes the search path for `apt`, `dnf` and `yum` in that order and
/// stops at the first hit.
pub struct EnvironmentProber<'a, L> {
    locator: &'a L,
}

impl<'a, L: ExecutableLocator> EnvironmentProber<'a, L> {
    pub fn new(locator: &'a L) -> Self {
        Self { locator }
    }

    /// Returns the first supported manager found, or `Unknown`
    pub fn detect(&self) -> PackageManager {
        PackageManager::PROBE_ORDER
            .into_iter()
            .find(|manager| {
                manager
                    .executable()
                    .is_some_and(|name| self.locator.is_available(name))
            })
            .unwrap_or(PackageManager::Unknown)
    }

    /// Like [`detect`](Self::detect), but treats `Unknown` as fatal
    ///
    /// # Errors
    /// Returns [`SbomError::EnvironmentUnsupported`] if no supported
    /// manager is on the search path
    pub fn require(&self) -> Result<PackageManager> {
        match self.detect() {
            PackageManager::Unknown => Err(SbomError::EnvironmentUnsupported {
                searched: PackageManager::PROBE_ORDER
                    .iter()
                    .filter_map(PackageManager::executable)
                    .collect::<Vec<_>>()
                    .join(", "),
            }
            .into()),
            manager => Ok(manager),
        }
    }
}
