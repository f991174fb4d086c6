/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the binaries call the use cases
/// directly, so there is no inbound port to abstract.
pub mod outbound;
