/// Use cases module containing application business logic orchestration
mod generate_inventory_sbom;
mod generate_scan_sbom;

pub use generate_inventory_sbom::GenerateInventorySbomUseCase;
pub use generate_scan_sbom::GenerateScanSbomUseCase;
