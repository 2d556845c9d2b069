//! Property-based tests for the conversion engine and session history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use unit_converter::{convert, Category, SessionState};

prop_compose! {
    fn arbitrary_category()(variant in 0..5usize) -> Category {
        Category::ALL[variant]
    }
}

prop_compose! {
    fn category_with_unit()(category in arbitrary_category())
        (unit in prop::sample::select(category.units()), category in Just(category))
        -> (Category, &'static str) {
        (category, unit)
    }
}

prop_compose! {
    fn linear_category_with_units()(variant in prop::sample::select(vec![0usize, 1, 2, 4]))
        (a in prop::sample::select(Category::ALL[variant].units()),
         b in prop::sample::select(Category::ALL[variant].units()),
         variant in Just(variant))
        -> (Category, &'static str, &'static str) {
        (Category::ALL[variant], a, b)
    }
}

proptest! {
    #[test]
    fn same_unit_is_identity(
        (category, unit) in category_with_unit(),
        value in prop::num::f64::NORMAL | prop::num::f64::ZERO,
    ) {
        prop_assert_eq!(convert(value, unit, unit, category), value);
    }

    #[test]
    fn linear_round_trip_is_within_epsilon(
        (category, a, b) in linear_category_with_units(),
        value in -1.0e9..1.0e9f64,
    ) {
        let there = convert(value, a, b, category);
        let back = convert(there, b, a, category);
        let tolerance = 1e-12 * value.abs().max(1.0);
        prop_assert!((back - value).abs() <= tolerance, "{} -> {} -> {}", value, there, back);
    }

    #[test]
    fn temperature_round_trip_is_close(
        a in prop::sample::select(Category::Temperature.units()),
        b in prop::sample::select(Category::Temperature.units()),
        value in -1.0e6..1.0e6f64,
    ) {
        let back = convert(convert(value, a, b, Category::Temperature), b, a, Category::Temperature);
        prop_assert!((back - value).abs() <= 1e-6);
    }

    #[test]
    fn unknown_target_degrades(
        (category, unit) in category_with_unit(),
        value in -1.0e6..1.0e6f64,
    ) {
        let converted = convert(value, unit, "Bogus", category);
        if category == Category::Temperature {
            prop_assert_eq!(converted, value);
        } else {
            prop_assert_eq!(converted, 0.0);
        }
    }

    #[test]
    fn history_grows_newest_first(values in prop::collection::vec(-1.0e6..1.0e6f64, 1..20)) {
        let mut state = SessionState::new();
        for value in &values {
            state.set_input_value(value.to_string());
            state.perform_conversion().unwrap();
        }

        prop_assert_eq!(state.history().len(), values.len());
        for (entry, value) in state.history().iter().zip(values.iter().rev()) {
            prop_assert_eq!(&entry.input_value, &value.to_string());
        }
        prop_assert_eq!(state.result(), state.history()[0].result.as_str());
    }

    #[test]
    fn non_numeric_input_never_changes_state(text in "[a-zA-Z ]{1,12}") {
        prop_assume!(text.trim().parse::<f64>().is_err());

        let mut state = SessionState::new();
        state.set_input_value("1");
        state.perform_conversion().unwrap();
        state.set_input_value(text);
        let before = state.clone();

        prop_assert!(state.perform_conversion().is_err());
        prop_assert_eq!(state, before);
    }
}
