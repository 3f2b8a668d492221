mod command_gateway;
mod process_runner;

pub use {
    command_gateway::Gateway,
    process_runner::{ProcessOutput, ProcessRunner, ShellRunner},
};
