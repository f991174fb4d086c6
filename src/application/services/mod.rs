/// Application services - the individual steps both use cases are built from
mod environment_prober;
mod inventory_sbom_generator;
mod package_lister;
mod scan_sbom_generator;

pub use environment_prober::EnvironmentProber;
pub use inventory_sbom_generator::InventorySbomGenerator;
pub use package_lister::PackageLister;
pub use scan_sbom_generator::ScanSbomGenerator;
