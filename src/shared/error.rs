use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of failures.
///
/// Entry points use this to choose presentation and exit code without
/// matching on every error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No supported package manager was found on the host
    EnvironmentUnsupported,
    /// An external command ran but exited with a non-zero status
    SubprocessFailed,
    /// A required external tool is not installed
    DependencyMissing,
    /// Anything else (I/O, spawn failures, invalid input)
    Other,
}

/// Exit codes for both CLI binaries.
///
/// These codes allow CI systems to distinguish between different
/// types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// SBOM written
    Success = 0,
    /// Unexpected error (file I/O, spawn failure, invalid target, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// No supported package manager detected
    EnvironmentUnsupported = 3,
    /// Required external tool is not on the search path
    DependencyMissing = 4,
    /// An external command exited with a non-zero status
    SubprocessFailed = 5,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned by a use case.
    ///
    /// Errors that are not an [`SbomError`] anywhere in their chain map
    /// to [`ExitCode::ApplicationError`].
    pub fn for_error(error: &anyhow::Error) -> Self {
        let kind = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<SbomError>())
            .map(SbomError::kind)
            .unwrap_or(ErrorKind::Other);
        Self::from(kind)
    }
}

impl From<ErrorKind> for ExitCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::EnvironmentUnsupported => ExitCode::EnvironmentUnsupported,
            ErrorKind::SubprocessFailed => ExitCode::SubprocessFailed,
            ErrorKind::DependencyMissing => ExitCode::DependencyMissing,
            ErrorKind::Other => ExitCode::ApplicationError,
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Unsupported package manager or not running on a supported Linux distribution.\nSearched for: {searched}\n\n💡 Hint: Install apt, dnf or yum, or pass --package-manager explicitly")]
    EnvironmentUnsupported { searched: String },

    #[error("Unsupported package manager: {name}")]
    UnsupportedPackageManager { name: String },

    #[error("Error listing packages with `{command}`:\n{stderr}")]
    ListingFailed { command: String, stderr: String },

    #[error("Error generating SBOM with `{command}`:\n{stderr}")]
    GenerationFailed { command: String, stderr: String },

    #[error("'{tool}' not found in PATH\n\n💡 Hint: {install_hint}")]
    DependencyMissing { tool: String, install_hint: String },

    #[error("Failed to run `{command}`\nDetails: {details}\n\n💡 Hint: Please verify that the command is installed and executable")]
    CommandSpawnFailed { command: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid scan target: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory with --target")]
    InvalidScanTarget { path: PathBuf, reason: String },
}

impl SbomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SbomError::EnvironmentUnsupported { .. } => ErrorKind::EnvironmentUnsupported,
            SbomError::ListingFailed { .. } | SbomError::GenerationFailed { .. } => {
                ErrorKind::SubprocessFailed
            }
            SbomError::DependencyMissing { .. } => ErrorKind::DependencyMissing,
            SbomError::UnsupportedPackageManager { .. }
            | SbomError::CommandSpawnFailed { .. }
            | SbomError::FileWriteError { .. }
            | SbomError::InvalidScanTarget { .. } => ErrorKind::Other,
        }
    }
}
