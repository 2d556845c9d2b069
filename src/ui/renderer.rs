//! Plain-text rendering of a view model.
//!
//! The renderer produces a block of text for line-oriented terminals. It does
//! not position the cursor or emit colors, so the output can be logged or
//! compared in tests as is.

use crate::app::SessionState;
use crate::ui::viewmodel::{UnitSelector, ViewModel};
use std::fmt::Write;

/// Renders the session to a string.
///
/// # Example
///
/// ```rust
/// use unit_converter::app::SessionState;
/// use unit_converter::ui::render;
///
/// let text = render(&SessionState::new());
/// assert!(text.contains("[Length]"));
/// ```
#[must_use]
pub fn render(state: &SessionState) -> String {
    render_viewmodel(&state.compute_viewmodel())
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &ViewModel) -> String {
    let mut out = String::new();

    let tabs: Vec<String> = vm
        .categories
        .iter()
        .map(|tab| {
            if tab.is_selected {
                format!("[{}]", tab.label)
            } else {
                tab.label.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join("  "));

    let input = if vm.input_value.is_empty() {
        "_"
    } else {
        vm.input_value.as_str()
    };
    let _ = writeln!(
        out,
        "  {input} {} -> {}",
        vm.from.abbreviation, vm.to.abbreviation
    );

    render_options(&mut out, &vm.from);
    render_options(&mut out, &vm.to);

    if let Some(result) = &vm.result {
        let _ = writeln!(out, "  = {} {}", result.value, result.unit);
    }

    if vm.history.is_empty() {
        let _ = writeln!(out, "  history: {} entries", vm.history_count);
    } else {
        let _ = writeln!(out, "  history:");
        for line in &vm.history {
            let _ = writeln!(out, "    {line}");
        }
    }

    out
}

fn render_options(out: &mut String, selector: &UnitSelector) {
    if !selector.is_open {
        return;
    }
    let _ = writeln!(out, "  {} units:", selector.label);
    for option in &selector.options {
        let _ = writeln!(out, "    - {option}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DropdownSide;
    use crate::domain::Category;

    #[test]
    fn renders_selection_and_result() {
        let mut state = SessionState::new();
        state.select_category(Category::Temperature);
        state.set_input_value("0");
        state.perform_conversion().unwrap();

        let text = render(&state);
        assert_eq!(
            text,
            "Length  Weight  Volume  [Temperature]  Time\n\
             \x20 0 °C -> °F\n\
             \x20 = 32.0000 Fahrenheit\n\
             \x20 history: 1 entries\n"
        );
    }

    #[test]
    fn renders_open_selector_and_visible_history() {
        let mut state = SessionState::new();
        state.select_category(Category::Temperature);
        state.set_dropdown_open(DropdownSide::Input, true);
        state.toggle_history_visibility();

        let text = render(&state);
        assert!(text.contains("  _ °C -> °F\n"));
        assert!(text.contains("  from units:\n    - Celsius\n    - Fahrenheit\n    - Kelvin\n"));
        assert!(!text.contains("to units:"));
    }
}
