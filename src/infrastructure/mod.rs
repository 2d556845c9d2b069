//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where the converter reads its configuration and writes
//! its log file, following the XDG base directory conventions with a home
//! directory fallback.

pub mod paths;

pub use paths::{config_file, data_dir, expand_tilde};
