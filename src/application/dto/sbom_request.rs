use crate::sbom_generation::domain::{DocumentFormat, PackageManager, SbomSchema, ScanOutputFormat};
use std::path::PathBuf;

/// InventorySbomRequest - request DTO for the inventory-based use case
#[derive(Debug, Clone)]
pub struct InventorySbomRequest {
    /// Where the conversion tool writes the SBOM
    pub output_path: PathBuf,
    pub schema: SbomSchema,
    pub format: DocumentFormat,
    /// Skips search-path probing when set
    pub package_manager: Option<PackageManager>,
}

impl InventorySbomRequest {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            schema: SbomSchema::default(),
            format: DocumentFormat::default(),
            package_manager: None,
        }
    }

    pub fn with_schema(mut self, schema: SbomSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_package_manager(mut self, package_manager: Option<PackageManager>) -> Self {
        self.package_manager = package_manager;
        self
    }
}

/// ScanSbomRequest - request DTO for the filesystem-scan use case
#[derive(Debug, Clone)]
pub struct ScanSbomRequest {
    /// Where the scanner's stdout is written
    pub output_path: PathBuf,
    pub format: ScanOutputFormat,
    /// Directory handed to the scanner
    pub target_path: PathBuf,
}

impl ScanSbomRequest {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            format: ScanOutputFormat::default(),
            target_path: PathBuf::from("/"),
        }
    }

    pub fn with_format(mut self, format: ScanOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_target(mut self, target_path: PathBuf) -> Self {
        self.target_path = target_path;
        self
    }
}
