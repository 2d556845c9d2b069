//! Display-only selector state.
//!
//! The session tracks one flag per unit selector. Opening one selector closes
//! the other, so at most one list is expanded at a time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which unit selector an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownSide {
    /// The source ("from") unit selector.
    Input,
    /// The target ("to") unit selector.
    Output,
}

impl DropdownSide {
    /// The opposite selector.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Input => Self::Output,
            Self::Output => Self::Input,
        }
    }
}

impl fmt::Display for DropdownSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("from"),
            Self::Output => f.write_str("to"),
        }
    }
}

impl FromStr for DropdownSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "from" | "input" | "in" => Ok(Self::Input),
            "to" | "output" | "out" => Ok(Self::Output),
            other => Err(format!("unknown selector: {other}")),
        }
    }
}
