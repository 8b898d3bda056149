//! GitHub Actions workflow commands

use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::actions;
use crate::error::{Result, TfeError};

/// Side effects the setup performs on the surrounding CI runner
pub trait WorkflowCommands {
    /// Register a value to be masked in all later job output
    fn set_secret(&self, value: &str);

    /// Make a variable visible to later steps of the job
    fn export_variable(&self, name: &str, value: &str) -> Result<()>;
}

/// Workflow commands for the GitHub Actions runner
pub struct GitHubWorkflow {
    /// Running under the Actions runner (masking is only meaningful there)
    in_actions: bool,
    /// `$GITHUB_ENV` file, if the runner provided one
    env_file: Option<PathBuf>,
}

impl GitHubWorkflow {
    pub fn new(in_actions: bool, env_file: Option<PathBuf>) -> Self {
        Self {
            in_actions,
            env_file,
        }
    }

    /// Detect the runner from `GITHUB_ACTIONS` and `GITHUB_ENV`
    pub fn from_env() -> Self {
        let in_actions = std::env::var(actions::DETECT_ENV)
            .map(|v| v == "true")
            .unwrap_or(false);
        let env_file = std::env::var_os(actions::ENV_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::new(in_actions, env_file)
    }

    fn append_env_file(&self, path: &Path, name: &str, value: &str) -> Result<()> {
        let entry = env_file_entry(name, value)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(entry.as_bytes())?;
        debug!("Exported {} via {}", name, path.display());
        Ok(())
    }
}

impl WorkflowCommands for GitHubWorkflow {
    fn set_secret(&self, value: &str) {
        if self.in_actions && !value.is_empty() {
            println!("{}", mask_command(value));
        }
    }

    fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        match &self.env_file {
            Some(path) => self.append_env_file(path, name, value),
            None => {
                println!("{}", set_env_command(name, value));
                Ok(())
            }
        }
    }
}

/// Report a failed run to the runner
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}

/// `::add-mask::` command for a secret
pub fn mask_command(value: &str) -> String {
    format!("::add-mask::{}", escape_data(value))
}

/// `::error::` command carrying a failure message
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// `::set-env` command, used when no `$GITHUB_ENV` file is available
pub fn set_env_command(name: &str, value: &str) -> String {
    format!(
        "::set-env name={}::{}",
        escape_property(name),
        escape_data(value)
    )
}

/// Escape a command property value (`name=...`)
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Escape command data so multi-line values stay on one command line
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Line(s) to append to `$GITHUB_ENV` for one variable
fn env_file_entry(name: &str, value: &str) -> Result<String> {
    if name.is_empty() || name.contains('=') || name.contains('\n') {
        return Err(TfeError::Config(format!(
            "Invalid environment variable name '{}'",
            name
        )));
    }

    if !value.contains('\n') && !value.contains('\r') {
        return Ok(format!("{}={}\n", name, value));
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let delimiter = format!("{}{}", actions::DELIMITER_PREFIX, nanos);
    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(TfeError::Config(format!(
            "Value for '{}' contains the env file delimiter",
            name
        )));
    }
    Ok(format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_mask_command() {
        assert_eq!(mask_command("abc"), "::add-mask::abc");
    }

    #[test]
    fn test_error_command_escapes_newlines() {
        assert_eq!(
            error_command("line one\nline two 100%"),
            "::error::line one%0Aline two 100%25"
        );
    }

    #[test]
    fn test_set_env_command() {
        assert_eq!(
            set_env_command("TF_CLI_CONFIG_FILE", "/home/runner/.terraformrc"),
            "::set-env name=TF_CLI_CONFIG_FILE::/home/runner/.terraformrc"
        );
    }

    #[test]
    fn test_set_env_command_escapes_property_and_data() {
        assert_eq!(
            set_env_command("A:B,C", "C:\\rc\n50%"),
            "::set-env name=A%3AB%2CC::C:\\rc%0A50%25"
        );
    }

    #[test]
    fn test_env_file_entry_simple() {
        assert_eq!(
            env_file_entry("TF_CLI_CONFIG_FILE", "/home/runner/.terraformrc").unwrap(),
            "TF_CLI_CONFIG_FILE=/home/runner/.terraformrc\n"
        );
    }

    #[test]
    fn test_env_file_entry_multiline_uses_delimiter() {
        let entry = env_file_entry("MULTI", "a\nb").unwrap();
        let lines: Vec<&str> = entry.lines().collect();
        assert_eq!(lines.len(), 4);
        let delimiter = lines[0].strip_prefix("MULTI<<").unwrap();
        assert!(delimiter.starts_with(actions::DELIMITER_PREFIX));
        assert_eq!(lines[1], "a");
        assert_eq!(lines[2], "b");
        assert_eq!(lines[3], delimiter);
    }

    #[test]
    fn test_env_file_entry_rejects_bad_name() {
        assert!(env_file_entry("A=B", "x").is_err());
        assert!(env_file_entry("", "x").is_err());
    }

    #[test]
    fn test_export_variable_appends_to_env_file() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join("github_env");
        fs::write(&env_file, "EXISTING=1\n").unwrap();

        let workflow = GitHubWorkflow::new(true, Some(env_file.clone()));
        workflow
            .export_variable("TF_CLI_CONFIG_FILE", "/home/runner/.terraformrc")
            .unwrap();

        assert_eq!(
            fs::read_to_string(&env_file).unwrap(),
            "EXISTING=1\nTF_CLI_CONFIG_FILE=/home/runner/.terraformrc\n"
        );
    }

    #[test]
    fn test_export_variable_creates_env_file() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join("github_env");

        let workflow = GitHubWorkflow::new(false, Some(env_file.clone()));
        workflow.export_variable("NAME", "value").unwrap();

        assert_eq!(fs::read_to_string(&env_file).unwrap(), "NAME=value\n");
    }

    #[test]
    fn test_export_variable_unwritable_env_file_is_error() {
        let dir = TempDir::new().unwrap();
        let workflow = GitHubWorkflow::new(true, Some(dir.path().join("missing").join("env")));
        assert!(workflow.export_variable("NAME", "value").is_err());
    }
}
