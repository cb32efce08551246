//! OAuth credential records and their on-disk persistence.

pub mod credentials;
pub mod store;

pub use credentials::{CredentialsFile, OAUTH_SCOPES, OauthCredentials, StoredOauth};
pub use store::CredentialStore;

/// Errors that can occur while persisting or reading credentials.
#[derive(Debug)]
pub enum CredentialError {
    /// The user's home directory could not be determined.
    HomeNotFound,
    /// The expiry text is not a base-10 integer.
    InvalidExpiry(String),
    /// An existing credentials file could not be parsed.
    Malformed(String),
    /// Directory creation or file I/O failed.
    Io(std::io::Error),
}

impl std::fmt::Display for CredentialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialError::HomeNotFound => {
                write!(f, "home directory could not be determined")
            }
            CredentialError::InvalidExpiry(text) => {
                write!(f, "expiry `{text}` is not a base-10 integer")
            }
            CredentialError::Malformed(msg) => {
                write!(f, "credentials file is not valid JSON: {msg}")
            }
            CredentialError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CredentialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CredentialError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CredentialError {
    fn from(e: std::io::Error) -> Self {
        CredentialError::Io(e)
    }
}
