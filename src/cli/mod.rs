//! CLI argument parsing and action input resolution

mod args;
mod inputs;

pub use args::Cli;
pub use inputs::{parse_boolean_input, required_input, SetupInputs};
