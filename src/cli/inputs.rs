//! Action input resolution and validation

use std::path::PathBuf;
use std::time::Duration;

use crate::actions::Severity;
use crate::cli::Cli;
use crate::config::inputs;
use crate::error::{Result, TfeError};
use crate::rc::RcFormat;

/// Validated inputs for one setup run
pub struct SetupInputs {
    pub token: String,
    pub organization: String,
    pub format: RcFormat,
    pub append: bool,
    pub log_level: Severity,
    pub config_dir: Option<PathBuf>,
    pub timeout: Option<Duration>,
    pub api_url: Option<String>,
}

// Token deliberately left out
impl std::fmt::Debug for SetupInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupInputs")
            .field("organization", &self.organization)
            .field("format", &self.format)
            .field("append", &self.append)
            .field("log_level", &self.log_level)
            .field("config_dir", &self.config_dir)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Cli {
    /// Resolve raw arguments into validated inputs
    pub fn resolve_inputs(&self) -> Result<SetupInputs> {
        let token = required_input(self.tfe_token.as_deref(), inputs::TOKEN)?;
        let organization = required_input(self.tfe_organization.as_deref(), inputs::ORGANIZATION)?;
        let use_json = parse_boolean_input(&self.use_json, inputs::USE_JSON)?;
        let append = parse_boolean_input(&self.append, inputs::APPEND)?;

        Ok(SetupInputs {
            token,
            organization,
            format: RcFormat::from_use_json(use_json),
            append,
            log_level: Severity::parse_or_default(self.log_level.trim()),
            config_dir: self.config_dir.clone(),
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            api_url: self.api_url.clone(),
        })
    }
}

/// Trimmed value of a required input; absent or blank is an error
pub fn required_input(value: Option<&str>, name: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(TfeError::Input(format!(
            "Input required and not supplied: {}",
            name
        ))),
    }
}

/// Parse a boolean input using the YAML 1.2 core schema spellings
pub fn parse_boolean_input(value: &str, name: &str) -> Result<bool> {
    match value.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(TfeError::Input(format!(
            "Input does not meet YAML 1.2 \"Core Schema\" specification: {}\n\
             Support boolean input list: `true | True | TRUE | false | False | FALSE`",
            name
        ))),
    }
}
