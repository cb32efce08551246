use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::auth::CredentialError;
use crate::auth::credentials::{CredentialsFile, OauthCredentials};
use crate::config;

/// File-backed store for the Claude AI OAuth credentials.
///
/// The store owns its config directory explicitly; the environment is read
/// once, in [`CredentialStore::from_env`], never inside an operation. Saves
/// fully replace the file. Concurrent writers are not ordered: the last
/// rename wins, which is acceptable for single-user, single-process usage
/// and must not be relied on in a multi-writer context.
pub struct CredentialStore {
    config_dir: PathBuf,
}

impl CredentialStore {
    /// Create a store rooted at the given config directory.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Create a store for the config directory resolved from the
    /// environment (override variable, then home-directory default).
    pub fn from_env() -> Result<Self, CredentialError> {
        let dir = config::config_dir_from_env().ok_or(CredentialError::HomeNotFound)?;
        Ok(Self::new(dir))
    }

    /// Path of the credentials file this store reads and writes.
    pub fn credentials_path(&self) -> PathBuf {
        config::credentials_path(&self.config_dir)
    }

    /// Persist `credentials`, replacing any previous file content.
    ///
    /// The config directory and missing ancestors are created as needed.
    /// The record is written to a sibling temp file and renamed into place,
    /// so a reader never observes a truncated file.
    pub fn save(&self, credentials: &OauthCredentials) -> Result<(), CredentialError> {
        let record = CredentialsFile::from_credentials(credentials)?;
        let data = serde_json::to_string(&record).map_err(std::io::Error::other)?;

        fs::create_dir_all(&self.config_dir)?;
        debug!(dir = %self.config_dir.display(), "Ensured config directory");

        let path = self.credentials_path();
        let tmp = path.with_extension("json.tmp");
        if let Err(e) = write_replace(&tmp, &path, data.as_bytes()) {
            let _ = fs::remove_file(&tmp);
            return Err(CredentialError::Io(e));
        }
        info!(path = %path.display(), "Saved OAuth credentials");
        Ok(())
    }

    /// Read the persisted credentials, if any.
    ///
    /// A missing file yields `Ok(None)`; a file that exists but does not
    /// parse yields [`CredentialError::Malformed`].
    pub fn load(&self) -> Result<Option<CredentialsFile>, CredentialError> {
        let path = self.credentials_path();
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No credentials file");
                return Ok(None);
            }
            Err(e) => return Err(CredentialError::Io(e)),
        };
        let record =
            serde_json::from_str(&data).map_err(|e| CredentialError::Malformed(e.to_string()))?;
        Ok(Some(record))
    }
}

fn write_replace(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    fs::write(tmp, data)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp, fs::Permissions::from_mode(0o600))?;
    }
    fs::rename(tmp, path)
}
