/// Domain layer - host package managers, command descriptions and SBOM selectors
pub mod domain;
pub mod services;
