//! Contract with the external function-point estimation service.
//!
//! The plugin never talks to the network itself. It prepares an [`HttpCall`]
//! for the host to issue and interprets the host's report of how the call
//! ended as a [`Settlement`].
//!
//! - `request`: request payload, headers and context tagging
//! - `response`: settlement classification into results or errors
//! - `access`: holds calls until the web access permission is answered

pub mod access;
pub mod request;
pub mod response;

pub use access::{Dispatch, WebAccess, PERMISSION_DENIED};

pub use request::{is_analysis_context, AnalysisRequest, HttpCall, CTX_ANALYSIS, CTX_REQUEST_TYPE};
pub use response::{is_success, Settlement};
