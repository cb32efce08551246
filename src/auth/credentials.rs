use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::CredentialError;

/// Scopes granted to every persisted token, in this order.
pub const OAUTH_SCOPES: [&str; 2] = ["user:inference", "user:profile"];

/// OAuth token bundle as received from the authorization flow.
///
/// `expires_at` is kept as the decimal text the flow returned and parsed
/// when the bundle is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OauthCredentials {
    /// Bearer token used for authenticated requests.
    pub access_token: String,
    /// Refresh token used to obtain a new access token when expired.
    pub refresh_token: String,
    /// Expiry as decimal text of a Unix timestamp in milliseconds.
    pub expires_at: String,
}

impl OauthCredentials {
    /// Create a bundle from the raw flow values.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at: expires_at.into(),
        }
    }

    /// Parse the expiry text as a base-10 millisecond timestamp.
    pub fn expires_at_millis(&self) -> Result<i64, CredentialError> {
        self.expires_at
            .parse::<i64>()
            .map_err(|_| CredentialError::InvalidExpiry(self.expires_at.clone()))
    }
}

/// Root object of the on-disk credentials file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsFile {
    /// The single OAuth entry the file holds.
    #[serde(rename = "claudeAiOauth")]
    pub claude_ai_oauth: StoredOauth,
}

impl CredentialsFile {
    /// Build the persisted record from an input bundle, validating the
    /// expiry text.
    pub fn from_credentials(credentials: &OauthCredentials) -> Result<Self, CredentialError> {
        Ok(Self {
            claude_ai_oauth: StoredOauth {
                access_token: credentials.access_token.clone(),
                refresh_token: credentials.refresh_token.clone(),
                expires_at: credentials.expires_at_millis()?,
                scopes: OAUTH_SCOPES.iter().map(|s| s.to_string()).collect(),
            },
        })
    }
}

/// Persisted form of an OAuth token bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredOauth {
    /// Bearer token copied verbatim from the input bundle.
    pub access_token: String,
    /// Refresh token copied verbatim from the input bundle.
    pub refresh_token: String,
    /// Expiry as a Unix timestamp in milliseconds.
    pub expires_at: i64,
    /// Granted scopes; always [`OAUTH_SCOPES`].
    pub scopes: Vec<String>,
}

impl StoredOauth {
    /// Expiry as UTC time, or `None` if the timestamp falls outside the
    /// representable range.
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.expires_at).single()
    }

    /// Whether the token is expired at `now`. Out-of-range timestamps count
    /// as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at_utc().is_none_or(|at| at <= now)
    }
}
