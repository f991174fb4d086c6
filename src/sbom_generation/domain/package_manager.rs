use std::fmt;
use std::str::FromStr;

/// Package manager identifier for the host
///
/// Determined once per run from executable presence on the search path.
/// `Unknown` is the sentinel returned when no supported manager is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Apt,
    Dnf,
    Yum,
    Unknown,
}

impl PackageManager {
    /// Supported managers in probing priority order
    pub const PROBE_ORDER: [PackageManager; 3] =
        [PackageManager::Apt, PackageManager::Dnf, PackageManager::Yum];

    /// Executable name probed on the search path
    pub fn executable(&self) -> Option<&'static str> {
        match self {
            PackageManager::Apt => Some("apt"),
            PackageManager::Dnf => Some("dnf"),
            PackageManager::Yum => Some("yum"),
            PackageManager::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
            PackageManager::Yum => "yum",
            PackageManager::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a user-supplied manager name; `unknown` is not accepted
impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apt" => Ok(PackageManager::Apt),
            "dnf" => Ok(PackageManager::Dnf),
            "yum" => Ok(PackageManager::Yum),
            _ => Err(format!(
                "Invalid package manager: {}. Please specify 'apt', 'dnf' or 'yum'",
                s
            )),
        }
    }
}
