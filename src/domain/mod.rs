//! Domain layer for the unit converter.
//!
//! This module contains the core domain types shared by the conversion engine
//! and the session state, independent of any front end or infrastructure
//! concern.
//!
//! # Organization
//!
//! - [`category`]: The closed set of conversion categories
//! - [`error`]: Error types and result aliases
//! - [`history`]: Immutable record of one successful conversion
//!
//! # Examples
//!
//! ```
//! use unit_converter::domain::{Category, HistoryEntry};
//!
//! let entry = HistoryEntry::new("1000", "Meter", "1.0000", "Kilometer");
//! assert_eq!(entry.to_string(), "1000 Meter = 1.0000 Kilometer");
//! assert_eq!(Category::default(), Category::Length);
//! ```

pub mod category;
pub mod error;
pub mod history;

pub use category::Category;
pub use error::{ConverterError, InvalidInput, Result};
pub use history::HistoryEntry;
