//! Conversion history records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded conversion.
///
/// Created only by a successful conversion and never mutated afterwards. The
/// input value is kept as the text the user typed, the result as the formatted
/// four-decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub input_value: String,
    pub input_unit: String,
    pub result: String,
    pub output_unit: String,
}

impl HistoryEntry {
    /// Creates a new history entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use unit_converter::domain::HistoryEntry;
    ///
    /// let entry = HistoryEntry::new("0", "Celsius", "32.0000", "Fahrenheit");
    /// assert_eq!(entry.to_string(), "0 Celsius = 32.0000 Fahrenheit");
    /// ```
    pub fn new(
        input_value: impl Into<String>,
        input_unit: impl Into<String>,
        result: impl Into<String>,
        output_unit: impl Into<String>,
    ) -> Self {
        Self {
            input_value: input_value.into(),
            input_unit: input_unit.into(),
            result: result.into(),
            output_unit: output_unit.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.input_value, self.input_unit, self.result, self.output_unit
        )
    }
}
