//! Domain layer for the fp-analyzer plugin.
//!
//! Core types independent of Zellij APIs:
//!
//! - [`error`]: Analysis failure taxonomy and plugin error types
//! - [`estimate`]: Function-point result model with lenient decoding

pub mod error;
pub mod estimate;

pub use error::{AnalysisError, AnalyzerError, Result};
pub use estimate::{AnalysisResult, FunctionEstimate, Score};
