//! Session state management and view model computation.
//!
//! This module defines [`SessionState`], the single source of truth for one
//! converter session: the raw input text, the selected category and units, the
//! last formatted result, the history log and the display-only flags. Every
//! mutation goes through one of the transition methods below; each leaves the
//! state consistent before returning.
//!
//! # Lifecycle
//!
//! A session starts on Length with its first two units selected, loops over
//! user actions for as long as the host runs, and is dropped with the host. No
//! state is persisted.
//!
//! # Example
//!
//! ```rust
//! use unit_converter::app::SessionState;
//!
//! let mut state = SessionState::new();
//! state.set_input_value("1000");
//! state.select_input_unit("Meter");
//! state.select_output_unit("Kilometer");
//! state.perform_conversion()?;
//! assert_eq!(state.result(), "1.0000");
//! assert_eq!(state.history_lines(), vec!["1000 Meter = 1.0000 Kilometer"]);
//! # Ok::<(), unit_converter::ConverterError>(())
//! ```

use super::modes::DropdownSide;
use crate::conversion::{self, catalog};
use crate::domain::{Category, ConverterError, HistoryEntry, InvalidInput, Result};
use crate::ui::viewmodel::{CategoryTab, ResultLine, UnitSelector, ViewModel};

/// Mutable aggregate holding one converter session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    input_value: String,
    input_unit: String,
    output_unit: String,
    result: String,
    selected_category: Category,
    current_units: &'static [&'static str],
    /// Newest first.
    history: Vec<HistoryEntry>,
    show_history: bool,
    input_expanded: bool,
    output_expanded: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Creates a session on the Length category with its first two units selected.
    #[must_use]
    pub fn new() -> Self {
        let category = Category::Length;
        let (from, to) = category.default_units();
        Self {
            input_value: String::new(),
            input_unit: from.to_string(),
            output_unit: to.to_string(),
            result: String::new(),
            selected_category: category,
            current_units: category.units(),
            history: Vec::new(),
            show_history: false,
            input_expanded: false,
            output_expanded: false,
        }
    }

    /// Raw input text as typed.
    #[must_use]
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    #[must_use]
    pub fn input_unit(&self) -> &str {
        &self.input_unit
    }

    #[must_use]
    pub fn output_unit(&self) -> &str {
        &self.output_unit
    }

    /// Last formatted result, empty when none is current.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    #[must_use]
    pub const fn selected_category(&self) -> Category {
        self.selected_category
    }

    /// Unit list of the selected category.
    #[must_use]
    pub const fn current_units(&self) -> &'static [&'static str] {
        self.current_units
    }

    /// Recorded conversions, newest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// History rendered as display lines, newest first.
    #[must_use]
    pub fn history_lines(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub const fn is_history_visible(&self) -> bool {
        self.show_history
    }

    /// Whether the selector on `side` is expanded.
    #[must_use]
    pub const fn is_dropdown_open(&self, side: DropdownSide) -> bool {
        match side {
            DropdownSide::Input => self.input_expanded,
            DropdownSide::Output => self.output_expanded,
        }
    }

    /// Stores the raw input text verbatim and clears the result.
    pub fn set_input_value(&mut self, text: impl Into<String>) {
        self.input_value = text.into();
        self.result.clear();
        tracing::debug!(input_value = %self.input_value, "input value changed");
    }

    /// Selects the source unit, closes its selector and clears the result.
    pub fn select_input_unit(&mut self, unit: impl Into<String>) {
        self.input_unit = unit.into();
        self.input_expanded = false;
        self.result.clear();
        tracing::debug!(input_unit = %self.input_unit, "input unit selected");
    }

    /// Selects the target unit, closes its selector and clears the result.
    pub fn select_output_unit(&mut self, unit: impl Into<String>) {
        self.output_unit = unit.into();
        self.output_expanded = false;
        self.result.clear();
        tracing::debug!(output_unit = %self.output_unit, "output unit selected");
    }

    /// Switches to `category`, resetting input, result and unit selections.
    ///
    /// Returns `false` without touching anything when `category` is already
    /// selected.
    pub fn select_category(&mut self, category: Category) -> bool {
        if category == self.selected_category {
            tracing::debug!(category = %category, "category unchanged");
            return false;
        }

        let (from, to) = category.default_units();
        self.selected_category = category;
        self.current_units = category.units();
        self.input_value.clear();
        self.result.clear();
        self.input_unit = from.to_string();
        self.output_unit = to.to_string();

        tracing::debug!(
            category = %category,
            input_unit = from,
            output_unit = to,
            "category selected"
        );
        true
    }

    /// Exchanges the selected units.
    ///
    /// A non-empty result moves into the input so conversions can be chained;
    /// otherwise the input text stays as it is.
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.input_unit, &mut self.output_unit);
        if !self.result.is_empty() {
            self.input_value = std::mem::take(&mut self.result);
        }
        tracing::debug!(
            input_unit = %self.input_unit,
            output_unit = %self.output_unit,
            input_value = %self.input_value,
            "units swapped"
        );
    }

    /// Converts the current input and records it in the history.
    ///
    /// On success the formatted result is stored and a new entry is prepended to
    /// the history; the new entry is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConverterError::InvalidInput`] when the input is not a number or
    /// either unit is unselected. The state is left exactly as it was.
    pub fn perform_conversion(&mut self) -> Result<&HistoryEntry> {
        let value = self.validate()?;

        let converted = conversion::convert(
            value,
            &self.input_unit,
            &self.output_unit,
            self.selected_category,
        );
        let formatted = conversion::format_result(converted);

        let entry = HistoryEntry::new(
            self.input_value.clone(),
            self.input_unit.clone(),
            formatted.clone(),
            self.output_unit.clone(),
        );

        tracing::debug!(
            category = %self.selected_category,
            entry = %entry,
            history_len = self.history.len() + 1,
            "conversion recorded"
        );

        self.result = formatted;
        self.history.insert(0, entry);
        Ok(&self.history[0])
    }

    fn validate(&self) -> Result<f64> {
        let reason = match conversion::parse_value(&self.input_value) {
            None => InvalidInput::NotANumber(self.input_value.clone()),
            Some(_) if self.input_unit.is_empty() => InvalidInput::MissingInputUnit,
            Some(_) if self.output_unit.is_empty() => InvalidInput::MissingOutputUnit,
            Some(value) => return Ok(value),
        };

        tracing::debug!(reason = %reason, "conversion rejected");
        Err(ConverterError::InvalidInput(reason))
    }

    /// Flips history visibility. Display only.
    pub fn toggle_history_visibility(&mut self) {
        self.show_history = !self.show_history;
        tracing::debug!(show_history = self.show_history, "history visibility toggled");
    }

    /// Empties the history.
    pub fn clear_history(&mut self) {
        tracing::debug!(cleared = self.history.len(), "history cleared");
        self.history.clear();
    }

    /// Opens or closes one selector. Opening one side closes the other.
    pub fn set_dropdown_open(&mut self, side: DropdownSide, open: bool) {
        match side {
            DropdownSide::Input => self.input_expanded = open,
            DropdownSide::Output => self.output_expanded = open,
        }
        if open {
            match side.other() {
                DropdownSide::Input => self.input_expanded = false,
                DropdownSide::Output => self.output_expanded = false,
            }
        }
        tracing::trace!(side = %side, open, "dropdown toggled");
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Selector option lists are only filled for the expanded side, and history
    /// lines only while the history is visible.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ViewModel {
        let categories = Category::ALL
            .into_iter()
            .map(|category| CategoryTab {
                label: category.name().to_string(),
                is_selected: category == self.selected_category,
            })
            .collect();

        let result = (!self.result.is_empty()).then(|| ResultLine {
            value: self.result.clone(),
            unit: self.output_unit.clone(),
        });

        let history = if self.show_history {
            self.history_lines()
        } else {
            vec![]
        };

        ViewModel {
            categories,
            input_value: self.input_value.clone(),
            from: self.compute_selector(DropdownSide::Input),
            to: self.compute_selector(DropdownSide::Output),
            result,
            history,
            history_count: self.history.len(),
        }
    }

    fn compute_selector(&self, side: DropdownSide) -> UnitSelector {
        let unit = match side {
            DropdownSide::Input => &self.input_unit,
            DropdownSide::Output => &self.output_unit,
        };
        let is_open = self.is_dropdown_open(side);
        let options = if is_open {
            self.current_units
                .iter()
                .map(|unit| (*unit).to_string())
                .collect()
        } else {
            vec![]
        };

        UnitSelector {
            label: side.to_string(),
            abbreviation: catalog::abbreviation(unit).to_string(),
            is_open,
            options,
        }
    }
}
