//! Path resolution for configuration and log files.
//!
//! Directories are resolved from the environment on every call:
//!
//! - config: `$XDG_CONFIG_HOME/unit-converter`, else `~/.config/unit-converter`
//! - data: `$XDG_DATA_HOME/unit-converter`, else `~/.local/share/unit-converter`
//!
//! When neither the XDG variable nor `HOME` is set, paths are relative to the
//! working directory.

use std::env;
use std::path::PathBuf;

/// Application directory name under the XDG base directories.
const APP_DIR: &str = "unit-converter";

/// Returns the default configuration file path.
///
/// # Examples
///
/// ```
/// use unit_converter::infrastructure::config_file;
///
/// assert!(config_file().ends_with("unit-converter/config.toml"));
/// ```
#[must_use]
pub fn config_file() -> PathBuf {
    base_dir("XDG_CONFIG_HOME", ".config")
        .join(APP_DIR)
        .join("config.toml")
}

/// Returns the data directory holding the log file.
#[must_use]
pub fn data_dir() -> PathBuf {
    base_dir("XDG_DATA_HOME", ".local/share").join(APP_DIR)
}

fn base_dir(xdg_var: &str, home_fallback: &str) -> PathBuf {
    resolve_base(
        env::var(xdg_var).ok(),
        env::var("HOME").ok(),
        home_fallback,
    )
}

fn resolve_base(xdg: Option<String>, home: Option<String>, home_fallback: &str) -> PathBuf {
    if let Some(dir) = xdg.filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }
    home.filter(|home| !home.is_empty())
        .map_or_else(|| PathBuf::from(home_fallback), |home| PathBuf::from(home).join(home_fallback))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or any path when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use unit_converter::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_with_home(path, env::var("HOME").ok().as_deref())
}

fn expand_with_home(path: &str, home: Option<&str>) -> String {
    match home {
        Some(home) if path == "~" => home.to_string(),
        Some(home) if path.starts_with("~/") => path.replacen('~', home, 1),
        _ => path.to_string(),
    }
}
