//! Lifecycle phase of the analysis workflow.
//!
//! # State Machine
//!
//! ```text
//!            Analyze                     2xx + JSON
//! Idle ───────────────► Loading ─────────────────────► Success
//!   ▲                    │   ▲                            │
//!   │                    │   └──────── Analyze ───────────┤
//!   │                    │ non-2xx / no JSON / transport  │
//!   │                    ▼                                │
//!   │                  Error ◄────────────────────────────┘
//!   └── (initial)        └──────── Analyze ──► Loading
//! ```
//!
//! `Loading` does not accept `Analyze`; it leaves only through a settlement.
//! Because the error message and the result are payloads of different
//! variants, they can never be observed together.

use crate::domain::AnalysisResult;

/// Where the current request/response cycle stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    /// No request has been issued yet.
    #[default]
    Idle,

    /// One request is in flight. The analyze trigger is disabled.
    Loading,

    /// The last cycle failed.
    Error {
        /// User-facing description of the failure.
        message: String,
    },

    /// The last cycle succeeded.
    Success {
        /// The decoded result. `None` when the service answered with an empty
        /// body such as `null`; nothing is presented then.
        result: Option<AnalysisResult>,
    },
}

impl Phase {
    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Error message, populated only in [`Phase::Error`].
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Result, populated only in [`Phase::Success`] with a non-empty body.
    #[must_use]
    pub const fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Success { result } => result.as_ref(),
            _ => None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Error { .. } => "error",
            Self::Success { .. } => "success",
        }
    }
}
