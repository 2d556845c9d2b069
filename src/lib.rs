//! Unit converter: an interactive converter for everyday units with a session history.
//!
//! The crate provides:
//! - A static catalog of five categories (length, weight, volume, temperature,
//!   time), their ordered unit lists and abbreviations
//! - A total conversion engine (factor-based or direct formulas per category)
//! - A session state manager that sequences user actions into consistent state
//!   and keeps a newest-first conversion history
//! - A plain-text front end in the `unit-converter` binary
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Interactive REPL (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Session state
//! │  - Event handling                                   │  ← Transitions
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ Conversion (conversion/) │   │ UI Layer (ui/)           │
//! │ - Unit catalog           │   │ - View model             │
//! │ - Conversion engine      │   │ - Text renderer          │
//! └──────────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Config and data paths (infrastructure/)          │
//! │  - Category, history entry, errors (domain/)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state with event/action model
//! - [`conversion`]: Unit catalog and conversion engine
//! - [`domain`]: Core domain types (Category, `HistoryEntry`, errors)
//! - [`infrastructure`]: Platform paths
//! - [`ui`]: View model and text rendering
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Settings are read from `~/.config/unit-converter/config.toml`:
//!
//! ```toml
//! category = "temperature"
//! show_history = true
//! trace_level = "debug"
//! log_file = "~/.cache/unit-converter.log"
//! ```
//!
//! and can be overridden on the command line with `key=value` arguments.
//!
//! # Example
//!
//! ```rust
//! use unit_converter::{handle_event, initialize, Category, Config, Event};
//!
//! let config = Config {
//!     default_category: Category::Temperature,
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! for event in [Event::SetInputValue("100".to_string()), Event::Convert] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.history_lines(), vec!["100 Celsius = 212.0000 Fahrenheit"]);
//! # Ok::<(), unit_converter::ConverterError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod conversion;
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, DropdownSide, Event, SessionHandle, SessionState};
pub use conversion::convert;
pub use domain::{Category, ConverterError, HistoryEntry, Result};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Converter configuration.
///
/// Loaded from a TOML file and refined by `key=value` command-line overrides.
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Category selected when the session starts. Default: Length
    #[serde(rename = "category")]
    pub default_category: Category,

    /// Whether the history list starts visible. Default: `false`
    pub show_history: bool,

    /// Tracing level or filter directive (`trace`, `debug`, `info`, `warn`,
    /// `error`). `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path; `~` is expanded. Default: `unit-converter.log` in the
    /// data directory.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: Category::Length,
            show_history: false,
            trace_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConverterError::Config`] for malformed TOML, unknown keys or
    /// invalid values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unit_converter::{Category, Config};
    ///
    /// let config = Config::from_toml_str("category = \"time\"")?;
    /// assert_eq!(config.default_category, Category::Time);
    /// assert!(!config.show_history);
    /// # Ok::<(), unit_converter::ConverterError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ConverterError::Config(e.to_string()))
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConverterError::Io`] if the file cannot be read and
    /// [`ConverterError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// Loads configuration from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_file`] for an existing file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies `key=value` overrides.
    ///
    /// # Parsing Rules
    ///
    /// - `category`: category name, case-insensitive (kept on parse error)
    /// - `show_history`: `true`/`false` (kept on parse error)
    /// - `trace_level`: any string
    /// - `log_file`: any string
    ///
    /// Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use unit_converter::{Category, Config};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("category".to_string(), "Volume".to_string());
    /// map.insert("show_history".to_string(), "yes please".to_string());
    ///
    /// let config = Config::default().with_overrides(&map);
    /// assert_eq!(config.default_category, Category::Volume);
    /// assert!(!config.show_history);
    /// ```
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        if let Some(value) = overrides.get("category") {
            match value.parse::<Category>() {
                Ok(category) => self.default_category = category,
                Err(e) => tracing::debug!(error = %e, "ignoring category override"),
            }
        }

        if let Some(value) = overrides.get("show_history") {
            if let Ok(show) = value.trim().parse::<bool>() {
                self.show_history = show;
            }
        }

        if let Some(level) = overrides.get("trace_level") {
            self.trace_level = Some(level.clone());
        }

        if let Some(file) = overrides.get("log_file") {
            self.log_file = Some(file.clone());
        }

        self
    }
}

/// Creates a session configured by `config`.
///
/// The session starts on the configured category with its first two units
/// selected and the history shown or hidden as configured.
///
/// # Example
///
/// ```rust
/// use unit_converter::{initialize, Category, Config};
///
/// let state = initialize(&Config { show_history: true, ..Default::default() });
/// assert_eq!(state.selected_category(), Category::Length);
/// assert!(state.is_history_visible());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> SessionState {
    tracing::debug!(
        category = %config.default_category,
        show_history = config.show_history,
        "initializing session"
    );

    let mut state = SessionState::new();
    state.select_category(config.default_category);
    if config.show_history {
        state.toggle_history_visibility();
    }
    state
}
