/// Process adapters for running external tools
mod process_runner;

pub use process_runner::ProcessRunner;
