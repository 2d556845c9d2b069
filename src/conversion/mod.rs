//! Conversion layer: the unit catalog and the conversion engine.
//!
//! The catalog is pure data (ordered unit lists, abbreviations, factor tables)
//! and the engine is a pure function over it. Neither holds state nor performs
//! I/O.
//!
//! # Modules
//!
//! - [`catalog`]: Per-category unit lists, abbreviations and factor tables
//! - [`engine`]: Category-dispatched conversion of a value between two units
//!
//! # Example
//!
//! ```rust
//! use unit_converter::conversion::{catalog, convert};
//! use unit_converter::domain::Category;
//!
//! let units = Category::Length.units();
//! assert_eq!(catalog::abbreviation(units[0]), "mm");
//! assert_eq!(convert(1000.0, "Meter", "Kilometer", Category::Length), 1.0);
//! ```

pub mod catalog;
pub mod engine;

pub use catalog::{abbreviation, Strategy};
pub use engine::{convert, format_result, parse_value};
