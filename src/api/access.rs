//! Web access gate for analysis calls.
//!
//! Zellij answers the `WebAccess` permission prompt asynchronously, so the
//! user can press analyze before the answer arrives. [`WebAccess`] holds such
//! a call until the answer comes, sends it once access is granted, and turns
//! it into a transport failure once access is denied. The plugin shim only
//! carries out the returned [`Dispatch`].

use super::request::{AnalysisRequest, HttpCall};
use super::response::Settlement;

/// Failure text when the user denied web access.
pub const PERMISSION_DENIED: &str = "web access permission was denied";

/// What the host side must do with an analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Issue the call now.
    Send(HttpCall),

    /// Nothing yet; the call waits for the permission answer.
    Held,

    /// The call cannot be made. Feed the settlement back to the controller.
    Failed(Settlement),
}

/// Permission state and the call waiting on it.
#[derive(Debug, Clone)]
pub struct WebAccess {
    endpoint: String,

    /// `None` until the permission prompt is answered.
    granted: Option<bool>,

    pending: Option<HttpCall>,
}

impl WebAccess {
    /// Creates a gate for `endpoint` with the permission still unanswered.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            granted: None,
            pending: None,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether a call is waiting for the permission answer.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Decides what happens to a new analysis request.
    pub fn submit(&mut self, request: &AnalysisRequest) -> Dispatch {
        let call = match request.to_call(&self.endpoint) {
            Ok(call) => call,
            Err(e) => {
                tracing::warn!(error = %e, "analysis request could not be encoded");
                return Self::failed(e.to_string());
            }
        };

        match self.granted {
            Some(true) => Dispatch::Send(call),
            Some(false) => {
                tracing::warn!("web access denied, failing request");
                Self::failed(PERMISSION_DENIED)
            }
            None => {
                tracing::debug!("web access not answered yet, holding request");
                if self.pending.replace(call).is_some() {
                    tracing::debug!("replaced an earlier held request");
                }
                Dispatch::Held
            }
        }
    }

    /// Records the permission answer and releases the held call, if any.
    ///
    /// Returns `None` when nothing was waiting.
    pub fn resolve(&mut self, granted: bool) -> Option<Dispatch> {
        self.granted = Some(granted);

        let Some(call) = self.pending.take() else {
            tracing::debug!(granted, "permission answered");
            return None;
        };

        if granted {
            tracing::debug!("permission granted - releasing held request");
            Some(Dispatch::Send(call))
        } else {
            tracing::warn!("permission denied - failing held request");
            Some(Self::failed(PERMISSION_DENIED))
        }
    }

    fn failed(reason: impl Into<String>) -> Dispatch {
        Dispatch::Failed(Settlement::TransportFailed {
            reason: reason.into(),
        })
    }
}
