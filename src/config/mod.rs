//! Resolution of the configuration directory and credentials file path.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that redirects the configuration root.
pub const CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";

/// File name of the persisted credentials, inside the config directory.
pub const CREDENTIALS_FILE: &str = ".credentials.json";

const PRODUCT_DIR: &str = "claude";
const DEFAULT_DIR: &str = ".claude";

/// Applies the config-directory rule to an optional override root.
///
/// The rule is deliberately asymmetric: an override root is a generic
/// configuration directory, so the `claude` namespace segment is appended to
/// it, while the default `<home>/.claude` already names the product and
/// gains no extra segment. Callers porting these paths elsewhere must keep
/// the asymmetry.
///
/// Returns `None` only when no override is given and the home directory
/// cannot be determined.
pub fn config_dir(override_root: Option<&Path>) -> Option<PathBuf> {
    match override_root {
        Some(root) => Some(root.join(PRODUCT_DIR)),
        None => dirs::home_dir().map(|home| home.join(DEFAULT_DIR)),
    }
}

/// Reads [`CONFIG_HOME_ENV`] and resolves the config directory.
///
/// An unset or empty variable falls back to the home-directory default.
/// This is the only place the process environment is consulted; everything
/// below it takes the directory as an explicit argument.
pub fn config_dir_from_env() -> Option<PathBuf> {
    let root = override_root(env::var(CONFIG_HOME_ENV).ok());
    config_dir(root.as_deref())
}

/// Returns the credentials file path inside `config_dir`.
pub fn credentials_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CREDENTIALS_FILE)
}

fn override_root(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
