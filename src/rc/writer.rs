//! Rc file writing with backup and append semantics

use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::rc;
use crate::error::{Result, TfeError};

use super::models::{RcFormat, TfeCredential};

/// Paths touched by a write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// The rc file that now holds the credentials
    pub path: PathBuf,
    /// Snapshot of the previous rc file, if there was one
    pub backup: Option<PathBuf>,
}

/// Writes HCP Terraform credentials into a Terraform CLI config file
pub struct RcWriter {
    dir: PathBuf,
    format: RcFormat,
    append: bool,
    host: String,
}

impl RcWriter {
    /// Create a writer for the given config directory (usually `$HOME`)
    pub fn new(dir: PathBuf, format: RcFormat, append: bool) -> Self {
        Self {
            dir,
            format,
            append,
            host: rc::HOST.to_string(),
        }
    }

    /// Create a writer rooted at the user's home directory
    pub fn in_home_dir(format: RcFormat, append: bool) -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| TfeError::Config("Could not determine home directory".to_string()))?;
        Ok(Self::new(home, format, append))
    }

    /// Target rc file path
    pub fn path(&self) -> PathBuf {
        self.dir.join(self.format.file_name())
    }

    /// Backup path (`<path>.bak`)
    pub fn backup_path(&self) -> PathBuf {
        with_suffix(&self.path(), rc::BACKUP_SUFFIX)
    }

    /// Back up any existing file, then write the credentials for the host.
    pub fn write(&self, token: &str) -> Result<WriteOutcome> {
        let path = self.path();
        let backup = self.backup()?;

        let existing = if self.append && backup.is_some() {
            debug!("Appending to existing config {}", path.display());
            Some(fs::read(&path)?)
        } else {
            None
        };

        let credential = TfeCredential::new(token);
        let content = match self.format {
            RcFormat::Json => render_json(existing.as_deref(), &path, &self.host, &credential)?
                .into_bytes(),
            RcFormat::Hcl => render_hcl(existing, &self.host, &credential),
        };

        write_atomic(&path, &content)?;
        info!("Written {} config", self.format);

        Ok(WriteOutcome { path, backup })
    }

    /// Copy an existing rc file to `<path>.bak`, replacing any older backup
    fn backup(&self) -> Result<Option<PathBuf>> {
        let path = self.path();
        if !path.exists() {
            debug!("No existing config at {}", path.display());
            return Ok(None);
        }

        let backup_path = self.backup_path();
        fs::copy(&path, &backup_path)?;
        warn!("Backed up existing config to: {}", backup_path.display());
        Ok(Some(backup_path))
    }
}

/// Merge the credential into an existing JSON document (or a fresh one)
fn render_json(
    existing: Option<&[u8]>,
    path: &Path,
    host: &str,
    credential: &TfeCredential,
) -> Result<String> {
    let parse_error = |message: String| TfeError::Parse {
        path: path.display().to_string(),
        message,
    };

    let mut document = match existing {
        Some(bytes) => {
            serde_json::from_slice::<Value>(bytes).map_err(|e| parse_error(e.to_string()))?
        }
        None => Value::Object(Map::new()),
    };

    let root = document
        .as_object_mut()
        .ok_or_else(|| parse_error("top-level value is not an object".to_string()))?;

    let credentials = root
        .entry("credentials")
        .or_insert_with(|| Value::Object(Map::new()));
    if is_falsy(credentials) {
        *credentials = Value::Object(Map::new());
    }
    let credentials = credentials
        .as_object_mut()
        .ok_or_else(|| parse_error("'credentials' is not an object".to_string()))?;

    let entry = serde_json::to_value(credential).map_err(|e| parse_error(e.to_string()))?;
    credentials.insert(host.to_string(), entry);

    serde_json::to_string_pretty(&document).map_err(|e| parse_error(e.to_string()))
}

/// `null`, `false`, `0` and `""` count as an absent `credentials` mapping
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Concatenate the HCL block after existing content (plus a newline)
fn render_hcl(existing: Option<Vec<u8>>, host: &str, credential: &TfeCredential) -> Vec<u8> {
    let mut content = match existing {
        Some(mut bytes) => {
            bytes.push(b'\n');
            bytes
        }
        None => Vec::new(),
    };
    content.extend_from_slice(credential.to_hcl_block(host).as_bytes());
    content
}

/// Write via a sibling temp file and rename, so the rc file is never half-written
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let tmp_path = with_suffix(path, rc::TMP_SUFFIX);

    if let Err(e) = write_and_rename(&tmp_path, path, content) {
        // The temp file holds the token in plain text
        if tmp_path.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                debug!("Could not remove {}: {}", tmp_path.display(), cleanup);
            }
        }
        return Err(e.into());
    }

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn write_and_rename(tmp_path: &Path, path: &Path, content: &[u8]) -> std::io::Result<()> {
    fs::write(tmp_path, content)?;

    // Credentials file: owner read/write only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp_path, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(tmp_path, path)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
