//! TFE API client module
//!
//! This module provides the single API interaction the setup needs:
//! checking that a token can read an organization.

mod client;
mod organizations;

pub use client::TfeClient;
