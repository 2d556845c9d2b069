//! Display layer for line-oriented front ends.
//!
//! ```text
//! SessionState → compute_viewmodel → ViewModel → render → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable state
//! - [`renderer`]: Plain-text renderer

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use viewmodel::{CategoryTab, ResultLine, UnitSelector, ViewModel};
