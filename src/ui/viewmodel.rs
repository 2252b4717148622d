//! View model types representing renderable UI state.
//!
//! View models are computed from application state and contain only
//! display-ready text. They carry no business logic; every label is already
//! localized and every score already formatted.
//!
//! # Architecture
//!
//! View models are created via `WorkflowState::compute_viewmodel()` and
//! consumed by the renderer. At most one of `progress`, `alert`, and `results`
//! is populated, mirroring the workflow phase.
//!
//! # Example
//!
//! ```rust
//! use fp_analyzer::ui::viewmodel::ResultRow;
//!
//! let row = ResultRow {
//!     summary: "Function: Login / FP: 3".to_string(),
//!     description: None,
//! };
//! assert_eq!(row.line_count(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title and instructions.
    pub header: HeaderInfo,

    /// Input box contents and the analyze trigger.
    pub input: InputBoxInfo,

    /// Progress indicator, present only while a request is in flight.
    pub progress: Option<ProgressInfo>,

    /// Error alert, present only after a failed cycle.
    pub alert: Option<AlertInfo>,

    /// Result card, present only after a successful cycle.
    pub results: Option<ResultsCard>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text shown at the top.
    pub title: String,

    /// One-line usage instructions below the title.
    pub instructions: String,
}

/// Input box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBoxInfo {
    /// Wrapped lines to show inside the box, already cut to the visible tail.
    pub lines: Vec<String>,

    /// Whether `lines` holds the placeholder rather than user text.
    pub is_placeholder: bool,

    /// The analyze trigger below the box.
    pub trigger: TriggerInfo,
}

/// Analyze trigger display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerInfo {
    /// "Analyze" or the in-progress label.
    pub label: String,

    /// `false` while a request is in flight.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressInfo {
    pub message: String,
}

/// Error alert display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertInfo {
    /// Alert heading.
    pub title: String,

    /// The stored error message, verbatim.
    pub message: String,
}

/// Result card display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsCard {
    /// Card heading.
    pub title: String,

    /// Visible function rows, in response order.
    pub rows: Vec<ResultRow>,

    /// Formatted total line.
    pub total: String,

    /// Rows scrolled off above the visible window.
    pub hidden_above: usize,

    /// Rows that did not fit below the visible window.
    pub hidden_below: usize,
}

/// One function row of the result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// Name and score line.
    pub summary: String,

    /// Description line, present only when the estimate carried one.
    pub description: Option<String>,
}

impl ResultRow {
    /// Screen lines this row occupies.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        if self.description.is_some() {
            2
        } else {
            1
        }
    }
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
