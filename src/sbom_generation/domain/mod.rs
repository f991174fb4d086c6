pub mod command;
pub mod package_list;
pub mod package_manager;
pub mod sbom_format;

pub use command::{CommandOutput, CommandSpec};
pub use package_list::PackageList;
pub use package_manager::PackageManager;
pub use sbom_format::{DocumentFormat, SbomSchema, ScanOutputFormat};
