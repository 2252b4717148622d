//! Error types for the fp-analyzer plugin.
//!
//! Two families live here. [`AnalysisError`] classifies why one analysis
//! request/response cycle failed; its `Display` text is exactly what the alert
//! region shows. [`AnalyzerError`] covers plugin-level failures (theme loading,
//! request encoding) and is paired with the [`Result`] alias.

use thiserror::Error;

/// Failure of a single analysis cycle.
///
/// Every variant ends the cycle in the `Error` phase. None of them escape the
/// controller.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The call never produced an HTTP response (connectivity, missing
    /// permission, unencodable request). Shown verbatim.
    #[error("{reason}")]
    Transport {
        /// Description of the underlying failure.
        reason: String,
    },

    /// The service answered with a non-success status. Only the code is
    /// surfaced; the body is not inspected.
    #[error("API Error: {status}")]
    Protocol {
        /// HTTP status code.
        status: u16,
    },

    /// The service answered with a success status but the body is not JSON.
    #[error("{0}")]
    Decoding(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Creates a transport failure.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Protocol { .. } => "protocol",
            Self::Decoding(_) => "decoding",
        }
    }
}

/// Plugin-level errors.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Request body could not be serialised.
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A specialized `Result` type for fp-analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn protocol_error_message_carries_status() {
        let err = AnalysisError::Protocol { status: 500 };
        assert_eq!(err.to_string(), "API Error: 500");
        assert_eq!(err.kind(), "protocol");
    }

    #[test]
    fn transport_and_decoding_messages_are_verbatim() {
        let err = AnalysisError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");

        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let expected = parse_err.to_string();
        let err = AnalysisError::from(parse_err);
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.kind(), "decoding");
    }
}
