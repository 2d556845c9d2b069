//! Structured logging to a rotating log file.
//!
//! The interactive front end owns stdout, so log records go to a file instead:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → unit-converter.log
//! ```
//!
//! # Configuration
//!
//! The level is taken from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! The file defaults to `unit-converter.log` in the data directory and rotates
//! at 10 MB, keeping 3 backups.
//!
//! # Usage
//!
//! ```rust,no_run
//! use unit_converter::observability::init_tracing;
//! use unit_converter::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("converter started");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Size-rotated file writer usable as a `MakeWriter`

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, log_file_path};
