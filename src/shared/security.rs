use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Validates an SBOM destination before any external tool writes to it.
///
/// # Security
/// An existing destination must not be a symbolic link. Uses
/// `symlink_metadata()` so the link itself is checked, not its target.
///
/// # Errors
/// Returns [`SbomError::FileWriteError`] if:
/// - The parent directory does not exist
/// - The destination exists and is a symbolic link or a directory
pub fn validate_output_path(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(SbomError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(SbomError::FileWriteError {
            path: path.to_path_buf(),
            details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
        }
        .into()),
        Ok(metadata) if metadata.is_dir() => Err(SbomError::FileWriteError {
            path: path.to_path_buf(),
            details: "Output path is a directory".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Validates that a scan target exists and is a directory
///
/// # Errors
/// Returns [`SbomError::InvalidScanTarget`] if the path does not exist,
/// cannot be inspected, or is not a directory
pub fn validate_scan_target(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| SbomError::InvalidScanTarget {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if !metadata.is_dir() {
        return Err(SbomError::InvalidScanTarget {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
