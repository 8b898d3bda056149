/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// JSON:API media type sent as Content-Type
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Configuration constants for the Terraform CLI config file
pub mod rc {
    /// Host whose credentials are written
    pub const HOST: &str = "app.terraform.io";

    /// JSON credentials file name (relative to the config dir)
    pub const JSON_FILE_NAME: &str = "credentials.tfrc.json";

    /// Legacy HCL rc file name (relative to the config dir)
    pub const HCL_FILE_NAME: &str = ".terraformrc";

    /// Suffix appended to the rc file name for the backup copy
    pub const BACKUP_SUFFIX: &str = ".bak";

    /// Suffix for the temporary file used during atomic writes
    pub const TMP_SUFFIX: &str = ".tmp";

    /// Variable exported for downstream steps
    pub const EXPORT_VAR: &str = "TF_CLI_CONFIG_FILE";
}

/// Input names and the environment variables GitHub Actions maps them to
pub mod inputs {
    pub const TOKEN: &str = "tfe_token";
    pub const TOKEN_ENV: &str = "INPUT_TFE_TOKEN";

    pub const ORGANIZATION: &str = "tfe_organization";
    pub const ORGANIZATION_ENV: &str = "INPUT_TFE_ORGANIZATION";

    pub const USE_JSON: &str = "use_json";
    pub const USE_JSON_ENV: &str = "INPUT_USE_JSON";

    pub const APPEND: &str = "append";
    pub const APPEND_ENV: &str = "INPUT_APPEND";

    pub const LOG_LEVEL_ENV: &str = "INPUT_LOG_LEVEL";
    pub const CONFIG_DIR_ENV: &str = "INPUT_CONFIG_DIR";
    pub const TIMEOUT_ENV: &str = "INPUT_TIMEOUT";

    /// API base URL override (used by tests against a mock server)
    pub const API_URL_ENV: &str = "TFRC_SETUP_API_URL";
}

/// GitHub Actions runner environment
pub mod actions {
    /// Set to "true" by the runner
    pub const DETECT_ENV: &str = "GITHUB_ACTIONS";

    /// File that collects exported environment variables
    pub const ENV_FILE_ENV: &str = "GITHUB_ENV";

    /// Delimiter prefix for multiline values in the env file
    pub const DELIMITER_PREFIX: &str = "ghadelimiter_";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "info";

    /// Default request timeout in seconds
    pub const TIMEOUT_SECS: &str = "30";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
    }

    #[test]
    fn test_input_env_vars_follow_actions_convention() {
        for (name, env) in [
            (inputs::TOKEN, inputs::TOKEN_ENV),
            (inputs::ORGANIZATION, inputs::ORGANIZATION_ENV),
            (inputs::USE_JSON, inputs::USE_JSON_ENV),
            (inputs::APPEND, inputs::APPEND_ENV),
        ] {
            assert_eq!(format!("INPUT_{}", name.to_uppercase()), env);
        }
    }

    #[test]
    fn test_default_host_is_valid() {
        assert!(rc::HOST.contains('.'));
        assert!(!rc::HOST.starts_with("https://"));
    }
}
