//! GitHub Actions runner integration
//!
//! Workflow commands (masking, exporting variables, failure reporting) and
//! the annotation-prefixed logger.

mod commands;
mod logger;

pub use commands::{
    error_command, mask_command, set_env_command, set_failed, GitHubWorkflow, WorkflowCommands,
};
pub use logger::{format_line, init_logger, Severity};
