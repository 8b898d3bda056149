//! Rc file formats and credential entries

use serde::{Deserialize, Serialize};

use crate::config::rc;

/// Output format of the rc file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RcFormat {
    /// `credentials.tfrc.json`
    Json,
    /// `.terraformrc`
    Hcl,
}

impl RcFormat {
    /// Pick the format from the `use_json` input
    pub fn from_use_json(use_json: bool) -> Self {
        if use_json {
            RcFormat::Json
        } else {
            RcFormat::Hcl
        }
    }

    /// File name inside the config directory
    pub fn file_name(&self) -> &'static str {
        match self {
            RcFormat::Json => rc::JSON_FILE_NAME,
            RcFormat::Hcl => rc::HCL_FILE_NAME,
        }
    }
}

impl std::fmt::Display for RcFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RcFormat::Json => write!(f, "JSON"),
            RcFormat::Hcl => write!(f, "HCL"),
        }
    }
}

/// Single credential entry, as stored under `credentials.<host>`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TfeCredential {
    pub token: String,
}

impl TfeCredential {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }

    /// Render as an HCL `credentials` block.
    ///
    /// The token is interpolated as-is; a token containing `"` or `\`
    /// yields a block Terraform cannot parse.
    pub fn to_hcl_block(&self, host: &str) -> String {
        format!(
            "credentials \"{}\" {{\n  token = \"{}\"\n}}\n",
            host, self.token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_use_json() {
        assert_eq!(RcFormat::from_use_json(true), RcFormat::Json);
        assert_eq!(RcFormat::from_use_json(false), RcFormat::Hcl);
    }

    #[test]
    fn test_format_file_names() {
        assert_eq!(RcFormat::Json.file_name(), "credentials.tfrc.json");
        assert_eq!(RcFormat::Hcl.file_name(), ".terraformrc");
    }

    #[test]
    fn test_format_display() {
        assert_eq!(RcFormat::Json.to_string(), "JSON");
        assert_eq!(RcFormat::Hcl.to_string(), "HCL");
    }

    #[test]
    fn test_hcl_block() {
        let block = TfeCredential::new("abc.atlasv1.xyz").to_hcl_block("app.terraform.io");
        assert_eq!(
            block,
            "credentials \"app.terraform.io\" {\n  token = \"abc.atlasv1.xyz\"\n}\n"
        );
    }

    #[test]
    fn test_hcl_block_does_not_escape_quotes() {
        let block = TfeCredential::new("a\"b").to_hcl_block("app.terraform.io");
        assert!(block.contains("token = \"a\"b\""));
    }

    #[test]
    fn test_credential_serializes_as_token_object() {
        let value = serde_json::to_value(TfeCredential::new("t")).unwrap();
        assert_eq!(value, serde_json::json!({"token": "t"}));
    }
}
