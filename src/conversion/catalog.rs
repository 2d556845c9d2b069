//! Static registry of categories, units, abbreviations and conversion factors.
//!
//! Unit lists are ordered: the first two entries of a category are the default
//! "from" and "to" selections. Factor tables map a unit name to the multiplier
//! that converts one of that unit into the category's base unit, whose own
//! factor is exactly `1.0`. Temperature has no factor table and is converted
//! with direct formulas by the engine.

use crate::domain::Category;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

const LENGTH_UNITS: &[&str] = &[
    "Millimeter", "Centimeter", "Meter", "Kilometer", "Inch", "Feet", "Yard", "Mile",
];

const WEIGHT_UNITS: &[&str] = &["Milligram", "Gram", "Kilogram", "Pound", "Ounce", "Ton"];

const VOLUME_UNITS: &[&str] = &[
    "Milliliter", "Liter", "Cubic Meter", "Teaspoon", "Tablespoon", "Cup", "Pint", "Quart",
    "Gallon",
];

const TEMPERATURE_UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];

const TIME_UNITS: &[&str] = &["Second", "Minute", "Hour", "Day", "Week", "Month", "Year"];

/// Base unit: meter.
const LENGTH_FACTORS: &[(&str, f64)] = &[
    ("Millimeter", 0.001),
    ("Centimeter", 0.01),
    ("Meter", 1.0),
    ("Kilometer", 1000.0),
    ("Inch", 0.0254),
    ("Feet", 0.3048),
    ("Yard", 0.9144),
    ("Mile", 1609.34),
];

/// Base unit: kilogram.
const WEIGHT_FACTORS: &[(&str, f64)] = &[
    ("Milligram", 0.000_001),
    ("Gram", 0.001),
    ("Kilogram", 1.0),
    ("Pound", 0.453_592),
    ("Ounce", 0.028_349_5),
    ("Ton", 1000.0),
];

/// Base unit: liter.
const VOLUME_FACTORS: &[(&str, f64)] = &[
    ("Milliliter", 0.001),
    ("Liter", 1.0),
    ("Cubic Meter", 1000.0),
    ("Teaspoon", 0.004_928_92),
    ("Tablespoon", 0.014_786_8),
    ("Cup", 0.24),
    ("Pint", 0.473_176),
    ("Quart", 0.946_353),
    ("Gallon", 3.785_41),
];

/// Base unit: second.
const TIME_FACTORS: &[(&str, f64)] = &[
    ("Second", 1.0),
    ("Minute", 60.0),
    ("Hour", 3600.0),
    ("Day", 86_400.0),
    ("Week", 604_800.0),
    ("Month", 2_629_800.0),
    ("Year", 31_557_600.0),
];

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("Millimeter", "mm"),
    ("Centimeter", "cm"),
    ("Meter", "m"),
    ("Kilometer", "km"),
    ("Inch", "in"),
    ("Feet", "ft"),
    ("Yard", "yd"),
    ("Mile", "mi"),
    ("Milligram", "mg"),
    ("Gram", "g"),
    ("Kilogram", "kg"),
    ("Pound", "lb"),
    ("Ounce", "oz"),
    ("Ton", "t"),
    ("Milliliter", "ml"),
    ("Liter", "L"),
    ("Cubic Meter", "m³"),
    ("Teaspoon", "tsp"),
    ("Tablespoon", "tbsp"),
    ("Cup", "cup"),
    ("Pint", "pt"),
    ("Quart", "qt"),
    ("Gallon", "gal"),
    ("Celsius", "°C"),
    ("Fahrenheit", "°F"),
    ("Kelvin", "K"),
    ("Second", "s"),
    ("Minute", "min"),
    ("Hour", "hr"),
    ("Day", "day"),
    ("Week", "wk"),
    ("Month", "mo"),
    ("Year", "yr"),
];

/// How the engine converts values within a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Multiply into the base unit, divide out of it.
    Linear(&'static [(&'static str, f64)]),
    /// Direct pairwise formulas (temperature).
    Formula,
}

impl Category {
    /// Ordered unit names of this category.
    #[must_use]
    pub const fn units(self) -> &'static [&'static str] {
        match self {
            Self::Length => LENGTH_UNITS,
            Self::Weight => WEIGHT_UNITS,
            Self::Volume => VOLUME_UNITS,
            Self::Temperature => TEMPERATURE_UNITS,
            Self::Time => TIME_UNITS,
        }
    }

    /// Default `(from, to)` selection: the first two units, or empty strings
    /// when the list is shorter.
    #[must_use]
    pub fn default_units(self) -> (&'static str, &'static str) {
        let units = self.units();
        (
            units.first().copied().unwrap_or(""),
            units.get(1).copied().unwrap_or(""),
        )
    }

    /// Conversion strategy used by the engine.
    #[must_use]
    pub const fn strategy(self) -> Strategy {
        match self {
            Self::Length => Strategy::Linear(LENGTH_FACTORS),
            Self::Weight => Strategy::Linear(WEIGHT_FACTORS),
            Self::Volume => Strategy::Linear(VOLUME_FACTORS),
            Self::Temperature => Strategy::Formula,
            Self::Time => Strategy::Linear(TIME_FACTORS),
        }
    }
}

/// Short display string for a unit, falling back to the full name.
///
/// ```
/// use unit_converter::conversion::catalog::abbreviation;
///
/// assert_eq!(abbreviation("Cubic Meter"), "m³");
/// assert_eq!(abbreviation("Furlong"), "Furlong");
/// ```
#[must_use]
pub fn abbreviation(unit: &str) -> &str {
    ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == unit)
        .map_or(unit, |&(_, abbr)| abbr)
}

/// Looks up the base-unit factor of `unit` within a linear category.
///
/// Returns `None` for units outside the category and for temperature.
#[must_use]
pub fn factor(category: Category, unit: &str) -> Option<f64> {
    match category.strategy() {
        Strategy::Linear(factors) => lookup(factors, unit),
        Strategy::Formula => None,
    }
}

pub(crate) fn lookup(factors: &[(&str, f64)], unit: &str) -> Option<f64> {
    factors
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|&(_, factor)| factor)
}

/// Returns `true` if `unit` is one of the category's units.
#[must_use]
pub fn contains(category: Category, unit: &str) -> bool {
    category.units().contains(&unit)
}

/// Resolves user-typed text to a unit of the category.
///
/// Tries, in order: the full name (case-insensitive), the abbreviation (exact,
/// then case-insensitive), and finally the best fuzzy match over the full names.
///
/// ```
/// use unit_converter::conversion::catalog::resolve_unit;
/// use unit_converter::domain::Category;
///
/// assert_eq!(resolve_unit(Category::Length, "km"), Some("Kilometer"));
/// assert_eq!(resolve_unit(Category::Volume, "tbsp"), Some("Tablespoon"));
/// assert_eq!(resolve_unit(Category::Time, "wek"), Some("Week"));
/// assert_eq!(resolve_unit(Category::Time, "xyz"), None);
/// ```
#[must_use]
pub fn resolve_unit(category: Category, query: &str) -> Option<&'static str> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let units = category.units();

    if let Some(&unit) = units.iter().find(|unit| unit.eq_ignore_ascii_case(query)) {
        return Some(unit);
    }

    if let Some(&unit) = units.iter().find(|unit| abbreviation(unit) == query) {
        return Some(unit);
    }

    if let Some(&unit) = units
        .iter()
        .find(|unit| abbreviation(unit).eq_ignore_ascii_case(query))
    {
        return Some(unit);
    }

    let matcher = SkimMatcherV2::default();
    let query_lower = query.to_lowercase();
    let best = units
        .iter()
        .filter_map(|unit| {
            matcher
                .fuzzy_match(&unit.to_lowercase(), &query_lower)
                .map(|score| (score, *unit))
        })
        .max_by_key(|&(score, _)| score)
        .map(|(_, unit)| unit);

    tracing::trace!(category = %category, query = %query, resolved = ?best, "fuzzy unit lookup");

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_unit_has_an_abbreviation() {
        for category in Category::ALL {
            for unit in category.units() {
                assert_ne!(abbreviation(unit), *unit, "{unit} lacks an abbreviation");
            }
        }
    }

    #[test]
    fn linear_tables_cover_unit_lists_and_pin_the_base() {
        for category in Category::ALL {
            match category.strategy() {
                Strategy::Linear(factors) => {
                    assert_eq!(factors.len(), category.units().len());
                    for unit in category.units() {
                        assert!(factor(category, unit).is_some(), "{unit} missing factor");
                    }
                    assert_eq!(factor(category, category.base_unit()), Some(1.0));
                }
                Strategy::Formula => assert_eq!(category, Category::Temperature),
            }
        }
    }

    #[test]
    fn unit_names_are_unique_across_categories() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::ALL {
            for unit in category.units() {
                assert!(seen.insert(*unit), "{unit} listed twice");
            }
        }
    }

    #[test]
    fn default_units_are_the_first_two_entries() {
        assert_eq!(Category::Length.default_units(), ("Millimeter", "Centimeter"));
        assert_eq!(Category::Weight.default_units(), ("Milligram", "Gram"));
        assert_eq!(Category::Volume.default_units(), ("Milliliter", "Liter"));
        assert_eq!(Category::Temperature.default_units(), ("Celsius", "Fahrenheit"));
        assert_eq!(Category::Time.default_units(), ("Second", "Minute"));
    }

    #[test]
    fn factor_misses_outside_the_category() {
        assert_eq!(factor(Category::Length, "Gram"), None);
        assert_eq!(factor(Category::Temperature, "Celsius"), None);
        assert!(contains(Category::Temperature, "Kelvin"));
        assert!(!contains(Category::Time, "Kelvin"));
    }

    #[test]
    fn resolves_names_abbreviations_and_fuzzy_text() {
        assert_eq!(resolve_unit(Category::Length, "meter"), Some("Meter"));
        assert_eq!(resolve_unit(Category::Length, "MI"), Some("Mile"));
        assert_eq!(resolve_unit(Category::Volume, "L"), Some("Liter"));
        assert_eq!(resolve_unit(Category::Volume, "cubic"), Some("Cubic Meter"));
        assert_eq!(resolve_unit(Category::Temperature, "°F"), Some("Fahrenheit"));
        assert_eq!(resolve_unit(Category::Weight, "kilo"), Some("Kilogram"));
        assert_eq!(resolve_unit(Category::Weight, "   "), None);
    }
}
