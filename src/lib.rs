//! tfrc-setup - Terraform CLI credentials for HCP Terraform
//!
//! Writes an API token into the Terraform CLI configuration and checks it
//! against an organization, for use as a GitHub Actions step or locally.
//!
//! # Features
//!
//! - Legacy HCL `.terraformrc` or JSON `credentials.tfrc.json` output
//! - Append mode that keeps other hosts' credentials
//! - Automatic `.bak` snapshot of any existing config
//! - Token validation against `/api/v2/organizations/<org>`
//! - `TF_CLI_CONFIG_FILE` exported for later steps
//!
//! # Example
//!
//! ```bash
//! # Write ~/.terraformrc and validate the token
//! tfrc-setup --tfe-token "$TOKEN" --tfe-organization my-org
//!
//! # Merge into ~/credentials.tfrc.json instead
//! tfrc-setup --tfe-token "$TOKEN" --tfe-organization my-org --use-json --append
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod rc;
pub mod setup;

pub use actions::{init_logger, set_failed, GitHubWorkflow, Severity, WorkflowCommands};
pub use cli::{Cli, SetupInputs};
pub use error::{Result, TfeError};
pub use hcp::TfeClient;
pub use rc::{RcFormat, RcWriter, WriteOutcome};
pub use setup::run_setup;
