//! Command-line arguments, each backed by its `INPUT_*` variable

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{defaults, inputs};

/// Terraform CLI credentials setup
#[derive(Parser, Debug)]
#[command(name = "tfrc-setup")]
#[command(version)]
#[command(
    about = "Write HCP Terraform credentials to the Terraform CLI config and validate the token",
    long_about = None
)]
pub struct Cli {
    /// HCP Terraform API token
    #[arg(long, env = inputs::TOKEN_ENV, hide_env_values = true)]
    pub tfe_token: Option<String>,

    /// Organization the token is validated against
    #[arg(long, env = inputs::ORGANIZATION_ENV)]
    pub tfe_organization: Option<String>,

    /// Write credentials.tfrc.json instead of .terraformrc
    #[arg(
        long,
        env = inputs::USE_JSON_ENV,
        value_name = "BOOL",
        default_value = "false",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub use_json: String,

    /// Merge into the existing config file instead of overwriting it
    #[arg(
        long,
        env = inputs::APPEND_ENV,
        value_name = "BOOL",
        default_value = "false",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub append: String,

    /// Log level (debug, info, warn)
    #[arg(short, long, env = inputs::LOG_LEVEL_ENV, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Directory to write the config file to (defaults to the home directory)
    #[arg(long, env = inputs::CONFIG_DIR_ENV)]
    pub config_dir: Option<PathBuf>,

    /// Token validation timeout in seconds (0 waits indefinitely)
    #[arg(long, env = inputs::TIMEOUT_ENV, default_value = defaults::TIMEOUT_SECS)]
    pub timeout: u64,

    /// API base URL override
    #[arg(long, env = inputs::API_URL_ENV, hide = true)]
    pub api_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::try_parse_from(["tfrc-setup"]).unwrap();
        assert_eq!(cli.use_json, "false");
        assert_eq!(cli.append, "false");
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.timeout, 30);
        assert!(cli.config_dir.is_none());
    }

    #[test]
    fn test_cli_bare_boolean_flags_mean_true() {
        let cli = Cli::try_parse_from(["tfrc-setup", "--use-json", "--append"]).unwrap();
        assert_eq!(cli.use_json, "true");
        assert_eq!(cli.append, "true");
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::try_parse_from([
            "tfrc-setup",
            "--tfe-token",
            "tok",
            "--tfe-organization",
            "my-org",
            "--use-json",
            "TRUE",
            "--append",
            "False",
            "-l",
            "warn",
            "--config-dir",
            "/tmp/rc",
            "--timeout",
            "0",
        ])
        .unwrap();

        assert_eq!(cli.tfe_token.as_deref(), Some("tok"));
        assert_eq!(cli.tfe_organization.as_deref(), Some("my-org"));
        assert_eq!(cli.use_json, "TRUE");
        assert_eq!(cli.append, "False");
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/rc")));
        assert_eq!(cli.timeout, 0);
    }

    #[test]
    fn test_cli_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["tfrc-setup", "--timeout", "soon"]).is_err());
    }
}
