mod command_builder;

pub use command_builder::{CommandBuilder, SCAN_TOOL, SCAN_TOOL_INSTALL_HINT};
