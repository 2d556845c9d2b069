//! View model types representing renderable session state.
//!
//! View models are created via `SessionState::compute_viewmodel()` and consumed
//! by the renderer. They hold display-ready data only.
//!
//! # Example
//!
//! ```rust
//! use unit_converter::app::SessionState;
//!
//! let vm = SessionState::new().compute_viewmodel();
//! assert!(vm.categories[0].is_selected);
//! assert_eq!(vm.from.abbreviation, "mm");
//! assert!(vm.result.is_none());
//! ```

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// All categories in display order.
    pub categories: Vec<CategoryTab>,

    /// Raw input text.
    pub input_value: String,

    /// Source unit selector.
    pub from: UnitSelector,

    /// Target unit selector.
    pub to: UnitSelector,

    /// Current result, if any.
    pub result: Option<ResultLine>,

    /// History lines, newest first. Empty while the history is hidden.
    pub history: Vec<String>,

    /// Number of recorded conversions, whether shown or not.
    pub history_count: usize,
}

/// One entry of the category bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub label: String,
    pub is_selected: bool,
}

/// A unit selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSelector {
    /// "from" or "to".
    pub label: String,

    /// Short display form of the selected unit.
    pub abbreviation: String,

    pub is_open: bool,

    /// Full unit names offered while the selector is open.
    pub options: Vec<String>,
}

/// The formatted result and the unit it is expressed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub value: String,
    pub unit: String,
}
