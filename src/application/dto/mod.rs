/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the CLI adapters
/// and the use cases, keeping the domain layer isolated.
mod sbom_request;
mod sbom_response;

pub use sbom_request::{InventorySbomRequest, ScanSbomRequest};
pub use sbom_response::SbomResponse;
