//! Outgoing side of the estimation endpoint contract.
//!
//! The service takes a single `POST` with a JSON body `{"userRequest": "..."}`.
//! [`AnalysisRequest::to_call`] turns the user's text into an [`HttpCall`]
//! that the plugin shim hands to Zellij's `web_request`. The call's context map
//! tags the request so its completion can be told apart from other traffic.

use crate::domain::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Context key identifying which subsystem issued a web request.
pub const CTX_REQUEST_TYPE: &str = "request_type";

/// Context value for analysis requests.
pub const CTX_ANALYSIS: &str = "analysis";

/// Payload of one analysis request.
///
/// The text is forwarded untouched: empty strings and arbitrary lengths are
/// allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(rename = "userRequest")]
    pub user_request: String,
}

/// A fully prepared HTTP call, independent of the host API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCall {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
    pub context: BTreeMap<String, String>,
}

impl AnalysisRequest {
    #[must_use]
    pub fn new(user_request: impl Into<String>) -> Self {
        Self {
            user_request: user_request.into(),
        }
    }

    /// Serialises the request body.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Encode`](crate::domain::AnalyzerError::Encode)
    /// if serialisation fails.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Builds the `POST` call for `endpoint`.
    ///
    /// # Errors
    ///
    /// Propagates encoding failures from [`encode`](Self::encode).
    pub fn to_call(&self, endpoint: &str) -> Result<HttpCall> {
        let body = self.encode()?;

        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let mut context = BTreeMap::new();
        context.insert(CTX_REQUEST_TYPE.to_string(), CTX_ANALYSIS.to_string());

        tracing::debug!(endpoint = %endpoint, body_len = body.len(), "prepared analysis call");

        Ok(HttpCall {
            url: endpoint.to_string(),
            headers,
            body,
            context,
        })
    }
}

/// Returns `true` when a completed web request belongs to the analysis flow.
#[must_use]
pub fn is_analysis_context(context: &BTreeMap<String, String>) -> bool {
    context.get(CTX_REQUEST_TYPE).map(String::as_str) == Some(CTX_ANALYSIS)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn body_uses_camel_case_field() {
        let body = AnalysisRequest::new("password reset").encode().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, serde_json::json!({"userRequest": "password reset"}));
    }

    #[test]
    fn empty_text_is_forwarded() {
        let body = AnalysisRequest::new("").encode().unwrap();
        assert_eq!(body, br#"{"userRequest":""}"#.to_vec());
    }

    #[test]
    fn call_is_json_post_tagged_as_analysis() {
        let call = AnalysisRequest::new("CSV export")
            .to_call("http://localhost:3000/api/analyze")
            .unwrap();

        assert_eq!(call.url, "http://localhost:3000/api/analyze");
        assert_eq!(
            call.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(is_analysis_context(&call.context));
    }

    #[test]
    fn foreign_context_is_not_analysis() {
        let mut context = BTreeMap::new();
        assert!(!is_analysis_context(&context));
        context.insert(CTX_REQUEST_TYPE.to_string(), "other".to_string());
        assert!(!is_analysis_context(&context));
    }
}
