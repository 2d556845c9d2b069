//! Conversion categories.
//!
//! A [`Category`] selects which unit list, abbreviations and conversion strategy
//! apply. The set is closed and fixed for the lifetime of the process.

use super::error::ConverterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five conversion domains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base unit: meter.
    #[default]
    Length,
    /// Base unit: kilogram.
    Weight,
    /// Base unit: liter.
    Volume,
    /// Converted with direct pairwise formulas.
    Temperature,
    /// Base unit: second.
    Time,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Length,
        Self::Weight,
        Self::Volume,
        Self::Temperature,
        Self::Time,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Volume => "Volume",
            Self::Temperature => "Temperature",
            Self::Time => "Time",
        }
    }

    /// Reference unit the category's factors are expressed against.
    ///
    /// Temperature has no factor table; Kelvin is reported as its natural base.
    #[must_use]
    pub const fn base_unit(self) -> &'static str {
        match self {
            Self::Length => "Meter",
            Self::Weight => "Kilogram",
            Self::Volume => "Liter",
            Self::Temperature => "Kelvin",
            Self::Time => "Second",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConverterError;

    /// Parses a category name case-insensitively.
    ///
    /// ```
    /// use unit_converter::domain::Category;
    ///
    /// assert_eq!("weight".parse::<Category>().unwrap(), Category::Weight);
    /// assert!("speed".parse::<Category>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConverterError::UnknownCategory(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_name_in_any_case() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
            assert_eq!(
                category.name().to_uppercase().parse::<Category>().unwrap(),
                category
            );
        }
        assert_eq!(" time ".parse::<Category>().unwrap(), Category::Time);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "speed".parse::<Category>().unwrap_err();
        assert!(matches!(err, ConverterError::UnknownCategory(name) if name == "speed"));
    }

    #[test]
    fn serializes_as_lowercase() {
        let json = serde_json::to_string(&Category::Temperature).unwrap();
        assert_eq!(json, "\"temperature\"");
        let back: Category = serde_json::from_str("\"volume\"").unwrap();
        assert_eq!(back, Category::Volume);
    }
}
