//! Application layer coordinating session state, events and actions.
//!
//! This module sits between a front end (the bundled REPL, or any other host)
//! and the conversion engine. It owns the session state and turns discrete user
//! actions into consistent state transitions.
//!
//! # Architecture
//!
//! ```text
//! User Input → Event → handle_event → SessionState transition → Actions → Host
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands for the host
//! - [`handle`]: Mutex-guarded session for multi-threaded hosts
//! - [`handler`]: Event processing and transition coordination
//! - [`modes`]: Unit selector sides
//! - [`state`]: Session state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use unit_converter::app::{handle_event, Event, SessionState};
//!
//! let mut state = SessionState::new();
//! handle_event(&mut state, &Event::SetInputValue("25".to_string()))?;
//! handle_event(&mut state, &Event::Convert)?;
//! assert_eq!(state.result(), "2.5000");
//! # Ok::<(), unit_converter::ConverterError>(())
//! ```

pub mod actions;
pub mod handle;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handle::SessionHandle;
pub use handler::{handle_event, Event};
pub use modes::DropdownSide;
pub use state::SessionState;
