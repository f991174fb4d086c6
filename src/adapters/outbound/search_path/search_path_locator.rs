use crate::ports::outbound::ExecutableLocator;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// SearchPathLocator adapter resolving program names against `PATH`
///
/// A candidate matches when it is a regular file with an execute bit set.
/// An unset or empty search path matches nothing.
pub struct SearchPathLocator {
    search_path: Option<OsString>,
}

impl SearchPathLocator {
    /// Uses the `PATH` of the current process
    pub fn new() -> Self {
        Self {
            search_path: env::var_os("PATH"),
        }
    }

    /// Uses an explicit search path (same syntax as `PATH`)
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl Default for SearchPathLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutableLocator for SearchPathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;

        env::split_paths(search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}
