//! Actions representing side effects to be executed by the host front end.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! core never prints, pops up notices or exits on its own; it asks the host to
//! do so through these commands.
//!
//! # Example
//!
//! ```rust
//! use unit_converter::app::Action;
//!
//! let actions = vec![Action::Notify {
//!     message: "Please enter a valid number and select units".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands the host executes after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Shows a short advisory message to the user.
    ///
    /// Emitted when a conversion request is rejected by validation.
    Notify {
        /// Text to display.
        message: String,
    },

    /// Ends the interactive session.
    Quit,
}
