//! Incoming side of the estimation endpoint contract.
//!
//! A [`Settlement`] is how one analysis call ended, as reported by the host.
//! [`Settlement::into_outcome`] applies the classification rules:
//!
//! - 2xx with a JSON body → [`AnalysisResult`] (lenient, never rejected for shape),
//!   or no result at all for a falsy body such as `null`
//! - any other status → [`AnalysisError::Protocol`]
//! - 2xx with a non-JSON body → [`AnalysisError::Decoding`]
//! - no response at all → [`AnalysisError::Transport`]

use crate::domain::{AnalysisError, AnalysisResult};
use std::collections::BTreeMap;

/// How an analysis call completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The service answered.
    Response {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// The call could not be completed.
    TransportFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl Settlement {
    /// Builds a settlement from a host `WebRequestResult`.
    ///
    /// The host reports a request that never reached the server as a non-2xx
    /// status with no headers and the error text as the body. That case
    /// becomes [`Settlement::TransportFailed`] so the text reaches the user.
    #[must_use]
    pub fn from_host(status: u16, headers: &BTreeMap<String, String>, body: Vec<u8>) -> Self {
        if !is_success(status) && headers.is_empty() {
            return Self::TransportFailed {
                reason: String::from_utf8_lossy(&body).into_owned(),
            };
        }
        Self::Response { status, body }
    }

    /// Classifies the settlement.
    ///
    /// # Errors
    ///
    /// Returns the [`AnalysisError`] matching the failure kind. The body of a
    /// non-success response is never inspected.
    pub fn into_outcome(self) -> Result<Option<AnalysisResult>, AnalysisError> {
        match self {
            Self::TransportFailed { reason } => Err(AnalysisError::transport(reason)),
            Self::Response { status, .. } if !is_success(status) => {
                Err(AnalysisError::Protocol { status })
            }
            Self::Response { body, .. } => {
                let value: serde_json::Value = serde_json::from_slice(&body)?;
                Ok(AnalysisResult::from_body(value))
            }
        }
    }

    /// Status code, when the service answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::TransportFailed { .. } => None,
        }
    }
}

/// Mirrors the fetch API's `ok` flag.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::domain::Score;

    fn response(status: u16, body: &str) -> Settlement {
        Settlement::Response {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn success_with_json_decodes_result() {
        let result = response(200, r#"{"functions":[{"name":"Login","fp":3}],"totalFP":3}"#)
            .into_outcome()
            .unwrap()
            .unwrap();
        assert_eq!(result.function_count(), 1);
        assert_eq!(result.total_fp, Some(Score::from(3)));
    }

    #[test]
    fn any_2xx_counts_as_success() {
        assert!(response(201, "{}").into_outcome().is_ok());
        assert!(response(299, "{}").into_outcome().is_ok());
    }

    #[test]
    fn server_error_surfaces_status_only() {
        let err = response(500, r#"{"error":"boom"}"#).into_outcome().unwrap_err();
        assert_eq!(err.to_string(), "API Error: 500");
    }

    #[test]
    fn non_success_body_is_not_parsed() {
        let err = response(404, "<html>not found</html>").into_outcome().unwrap_err();
        assert!(matches!(err, AnalysisError::Protocol { status: 404 }));
    }

    #[test]
    fn success_with_non_json_body_is_decoding_failure() {
        let err = response(200, "Internal error page").into_outcome().unwrap_err();
        assert_eq!(err.kind(), "decoding");
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn empty_success_body_is_decoding_failure() {
        let err = response(200, "").into_outcome().unwrap_err();
        assert_eq!(err.kind(), "decoding");
    }

    #[test]
    fn transport_failure_keeps_reason() {
        let err = Settlement::TransportFailed {
            reason: "connection refused".to_string(),
        }
        .into_outcome()
        .unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn null_success_body_has_no_result() {
        assert_eq!(response(200, "null").into_outcome().unwrap(), None);
        assert!(response(200, "[]").into_outcome().unwrap().is_some());
    }

    #[test]
    fn host_connection_failure_becomes_transport_failure() {
        let reason = "failed to connect to the server: Connection refused";
        let settlement = Settlement::from_host(400, &BTreeMap::new(), reason.as_bytes().to_vec());

        assert_eq!(
            settlement,
            Settlement::TransportFailed {
                reason: reason.to_string()
            }
        );
        assert_eq!(settlement.into_outcome().unwrap_err().to_string(), reason);
    }

    #[test]
    fn host_result_with_headers_is_a_response() {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        let err = Settlement::from_host(500, &headers, b"{}".to_vec())
            .into_outcome()
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Protocol { status: 500 }));

        let settlement = Settlement::from_host(200, &BTreeMap::new(), b"{}".to_vec());
        assert_eq!(settlement.status(), Some(200));
    }
}
