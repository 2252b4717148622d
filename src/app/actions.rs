//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after each event. Actions are the
//! boundary between pure state transitions and host calls: the handler decides
//! *that* a request is sent, the shim in `main.rs` decides *how*.
//!
//! # Example
//!
//! ```rust
//! use fp_analyzer::api::AnalysisRequest;
//! use fp_analyzer::Action;
//!
//! let actions = vec![Action::SubmitAnalysis(AnalysisRequest::new("CSV export"))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::api::AnalysisRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues exactly one request to the estimation endpoint.
    ///
    /// Emitted only on the transition into `Loading`; its completion must be
    /// fed back as `Event::AnalysisSettled`.
    SubmitAnalysis(AnalysisRequest),
}
