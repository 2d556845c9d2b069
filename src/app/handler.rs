//! Event handling and state transition logic.
//!
//! This module translates discrete user actions into [`SessionState`]
//! transitions and the side effects the host has to carry out.
//!
//! # Architecture
//!
//! 1. The front end turns user input into an [`Event`]
//! 2. [`handle_event`] pattern-matches the event and mutates the state
//! 3. It returns whether the view changed and a list of [`Action`]s
//!
//! A rejected conversion is not an error at this level: the state is left
//! untouched and an [`Action::Notify`] carries the advisory message.
//!
//! # Example
//!
//! ```rust
//! use unit_converter::app::{handle_event, Action, Event, SessionState};
//!
//! let mut state = SessionState::new();
//! let (_, actions) = handle_event(&mut state, &Event::Convert)?;
//! assert!(matches!(actions.as_slice(), [Action::Notify { .. }]));
//! # Ok::<(), unit_converter::ConverterError>(())
//! ```

use super::modes::DropdownSide;
use crate::app::{Action, SessionState};
use crate::domain::{Category, Result};

/// Discrete user actions that drive the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the raw input text.
    SetInputValue(String),
    /// Selects the source unit.
    SelectInputUnit(String),
    /// Selects the target unit.
    SelectOutputUnit(String),
    /// Switches to another category.
    SelectCategory(Category),
    /// Exchanges source and target units.
    SwapUnits,
    /// Converts the current input.
    Convert,
    /// Shows or hides the history list.
    ToggleHistory,
    /// Empties the history.
    ClearHistory,
    /// Expands or collapses one unit selector.
    SetDropdownOpen {
        /// Selector to change.
        side: DropdownSide,
        /// New expanded state.
        open: bool,
    },
    /// Ends the session.
    Quit,
}

/// Processes an event, mutates the session and returns actions to execute.
///
/// The returned flag tells the host whether the view has to be redrawn.
///
/// # Errors
///
/// Validation failures are reported through [`Action::Notify`]; any other error
/// from the state is propagated.
pub fn handle_event(state: &mut SessionState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetInputValue(text) => {
            state.set_input_value(text.as_str());
            Ok((true, vec![]))
        }
        Event::SelectInputUnit(unit) => {
            state.select_input_unit(unit.as_str());
            Ok((true, vec![]))
        }
        Event::SelectOutputUnit(unit) => {
            state.select_output_unit(unit.as_str());
            Ok((true, vec![]))
        }
        Event::SelectCategory(category) => Ok((state.select_category(*category), vec![])),
        Event::SwapUnits => {
            state.swap_units();
            Ok((true, vec![]))
        }
        Event::Convert => match state.perform_conversion() {
            Ok(_) => Ok((true, vec![])),
            Err(e) if e.is_validation() => Ok((
                false,
                vec![Action::Notify {
                    message: e.to_string(),
                }],
            )),
            Err(e) => Err(e),
        },
        Event::ToggleHistory => {
            state.toggle_history_visibility();
            Ok((true, vec![]))
        }
        Event::ClearHistory => {
            state.clear_history();
            Ok((true, vec![]))
        }
        Event::SetDropdownOpen { side, open } => {
            state.set_dropdown_open(*side, *open);
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::INVALID_INPUT_MESSAGE;

    fn run(state: &mut SessionState, events: &[Event]) -> Vec<(bool, Vec<Action>)> {
        events
            .iter()
            .map(|event| handle_event(state, event).unwrap())
            .collect()
    }

    #[test]
    fn conversion_flow_renders_and_records() {
        let mut state = SessionState::new();
        let outcomes = run(
            &mut state,
            &[
                Event::SelectCategory(Category::Weight),
                Event::SelectInputUnit("Kilogram".to_string()),
                Event::SelectOutputUnit("Pound".to_string()),
                Event::SetInputValue("1".to_string()),
                Event::Convert,
            ],
        );

        assert!(outcomes.iter().all(|(render, actions)| *render && actions.is_empty()));
        assert_eq!(state.result(), "2.2046");
        assert_eq!(state.history_lines(), vec!["1 Kilogram = 2.2046 Pound"]);
    }

    #[test]
    fn invalid_input_notifies_without_rendering() {
        let mut state = SessionState::new();
        state.set_input_value("twelve");
        let (render, actions) = handle_event(&mut state, &Event::Convert).unwrap();

        assert!(!render);
        assert_eq!(
            actions,
            vec![Action::Notify {
                message: INVALID_INPUT_MESSAGE.to_string()
            }]
        );
        assert!(state.history().is_empty());
    }

    #[test]
    fn reselecting_category_skips_render() {
        let mut state = SessionState::new();
        let (render, _) = handle_event(&mut state, &Event::SelectCategory(Category::Length)).unwrap();
        assert!(!render);
        let (render, _) = handle_event(&mut state, &Event::SelectCategory(Category::Time)).unwrap();
        assert!(render);
    }

    #[test]
    fn swap_chains_conversions() {
        let mut state = SessionState::new();
        run(
            &mut state,
            &[
                Event::SelectCategory(Category::Temperature),
                Event::SetInputValue("100".to_string()),
                Event::Convert,
                Event::SwapUnits,
                Event::Convert,
            ],
        );
        assert_eq!(
            state.history_lines(),
            vec![
                "212.0000 Fahrenheit = 100.0000 Celsius",
                "100 Celsius = 212.0000 Fahrenheit",
            ]
        );
    }

    #[test]
    fn dropdown_and_history_events() {
        let mut state = SessionState::new();
        run(
            &mut state,
            &[
                Event::SetDropdownOpen { side: DropdownSide::Output, open: true },
                Event::SetDropdownOpen { side: DropdownSide::Input, open: true },
                Event::ToggleHistory,
                Event::SetInputValue("1".to_string()),
                Event::Convert,
                Event::ClearHistory,
            ],
        );
        assert!(state.is_dropdown_open(DropdownSide::Input));
        assert!(!state.is_dropdown_open(DropdownSide::Output));
        assert!(state.is_history_visible());
        assert!(state.history().is_empty());
    }

    #[test]
    fn quit_emits_action() {
        let mut state = SessionState::new();
        assert_eq!(
            handle_event(&mut state, &Event::Quit).unwrap(),
            (false, vec![Action::Quit])
        );
    }
}
