/// Inbound adapters - command-line front ends driving the use cases
pub mod cli;
