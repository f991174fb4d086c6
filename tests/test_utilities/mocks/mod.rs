/// Mock implementations for testing
mod mock_command_runner;
mod mock_executable_locator;
mod mock_progress_reporter;

pub use mock_command_runner::{MockCommandRunner, StagedInventory};
pub use mock_executable_locator::MockExecutableLocator;
pub use mock_progress_reporter::MockProgressReporter;
