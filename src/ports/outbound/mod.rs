/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (search path, processes, console).
pub mod command_runner;
pub mod executable_locator;
pub mod progress_reporter;

pub use command_runner::CommandRunner;
pub use executable_locator::ExecutableLocator;
pub use progress_reporter::ProgressReporter;
