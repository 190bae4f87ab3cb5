//! Centralized path definitions for screener
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.screener/                  # or $SCREENER_HOME
//! ├── config.toml               # API endpoint, timeouts, reason catalog
//! └── session.toml              # Last reviewer and role (cleared on logout)
//! ```

use std::path::PathBuf;

/// Environment variable that relocates the screener home directory
pub const HOME_ENV: &str = "SCREENER_HOME";

/// Home directory name under the user's home
const APP_DIR: &str = ".screener";

/// Configuration filename
const CONFIG_FILE: &str = "config.toml";

/// Saved login filename
const SESSION_FILE: &str = "session.toml";

/// Get the screener home directory.
///
/// Returns `$SCREENER_HOME` when set, otherwise `~/.screener/`.
#[must_use]
pub fn app_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(APP_DIR),
    }
}

/// Get path to `config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    app_dir().join(CONFIG_FILE)
}

/// Get path to `session.toml`.
///
/// Holds the reviewer and role used to prefill the next login.
#[must_use]
pub fn session_file() -> PathBuf {
    app_dir().join(SESSION_FILE)
}
