//! distro-sbom - SBOM generation for Linux hosts
//!
//! Two flows share this library:
//!
//! - **Inventory**: detect the package manager (apt, dnf, yum), list the
//!   installed packages and convert the list with `distro2sbom`.
//! - **Scan**: run `syft` against a directory (the filesystem root by
//!   default) and write its output to a file.
//!
//! Both are thin orchestration over external tools; SBOM content is never
//! parsed or validated here.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_generation`): package managers, command descriptions, format selectors
//! - **Application Layer** (`application`): services and the two use cases
//! - **Ports** (`ports`): interfaces for the search path, processes and progress output
//! - **Adapters** (`adapters`): CLI definitions and concrete port implementations
//! - **Shared** (`shared`): error types, exit codes, path validation
//!
//! # Example
//!
//! ```no_run
//! use distro_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateInventorySbomUseCase::new(
//!     SearchPathLocator::new(),
//!     ProcessRunner::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = InventorySbomRequest::new(PathBuf::from("sbom.json"));
//! let response = use_case.execute(request)?;
//! println!("{} ({})", response.output_path.display(), response.package_manager);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::process::ProcessRunner;
    pub use crate::adapters::outbound::search_path::SearchPathLocator;
    pub use crate::application::dto::{InventorySbomRequest, SbomResponse, ScanSbomRequest};
    pub use crate::application::services::{
        EnvironmentProber, InventorySbomGenerator, PackageLister, ScanSbomGenerator,
    };
    pub use crate::application::use_cases::{
        GenerateInventorySbomUseCase, GenerateScanSbomUseCase,
    };
    pub use crate::ports::outbound::{CommandRunner, ExecutableLocator, ProgressReporter};
    pub use crate::sbom_generation::domain::{
        CommandOutput, CommandSpec, DocumentFormat, PackageList, PackageManager, SbomSchema,
        ScanOutputFormat,
    };
    pub use crate::sbom_generation::services::CommandBuilder;
    pub use crate::shared::error::{ErrorKind, ExitCode, SbomError};
    pub use crate::shared::Result;
}
