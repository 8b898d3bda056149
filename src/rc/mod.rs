//! Terraform CLI config file synthesis
//!
//! Writes the credentials for HCP Terraform either as a JSON
//! `credentials.tfrc.json` document or as a legacy HCL `.terraformrc`
//! block, backing up any existing file first.

mod models;
mod writer;

pub use models::{RcFormat, TfeCredential};
pub use writer::{RcWriter, WriteOutcome};
