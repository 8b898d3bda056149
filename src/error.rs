use std::fmt;

/// Custom error type for rc file setup
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed before a status was received
    Http(reqwest::Error),
    /// Token rejected for the organization (401/403)
    InvalidToken { org: String, status: u16 },
    /// Organization does not exist or is not visible (404)
    OrganizationNotFound { org: String },
    /// Any other non-success status from the API
    Api { status: u16 },
    /// Reading, copying or writing a file failed
    Io(std::io::Error),
    /// Existing JSON rc file could not be parsed or merged
    Parse { path: String, message: String },
    /// Missing or malformed action input
    Input(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "{}", e),
            TfeError::InvalidToken { org, status } => {
                write!(f, "Invalid token for org {} [{}]", org, status)
            }
            TfeError::OrganizationNotFound { org } => {
                write!(f, "Organization '{}' not found [404]", org)
            }
            TfeError::Api { status } => {
                write!(f, "Unexpected error validating org [{}]", status)
            }
            TfeError::Io(e) => write!(f, "{}", e),
            TfeError::Parse { path, message } => {
                write!(f, "Could not parse {}: {}", path, message)
            }
            TfeError::Input(msg) => write!(f, "{}", msg),
            TfeError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            TfeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<std::io::Error> for TfeError {
    fn from(err: std::io::Error) -> Self {
        TfeError::Io(err)
    }
}

/// Result type alias for setup operations
pub type Result<T> = std::result::Result<T, TfeError>;
