//! Function-point estimate model.
//!
//! The estimation service answers with loosely shaped JSON. These types form an
//! explicit optional-field contract over that payload: every field the UI reads
//! is an `Option` (or defaults to empty), and decoding never fails once the
//! body is valid JSON. Fields of an unexpected type are treated as absent.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use std::fmt;

/// A function-point score as sent by the estimation service.
///
/// Numbers are kept as `serde_json::Number` so they render exactly as they
/// arrived (`3` stays `3`, `2.5` stays `2.5`). Strings are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Score {
    Number(Number),
    Text(String),
}

impl Score {
    /// Reads a score from an arbitrary JSON value.
    ///
    /// Returns `None` for `null`, booleans, arrays and objects.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Score {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

/// One detected function and its score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FunctionEstimate {
    /// Label of the detected function. Empty when the service omitted it.
    #[serde(default, deserialize_with = "lenient_label")]
    pub name: String,

    /// Function-point score. Not range-checked.
    #[serde(default, deserialize_with = "lenient_score")]
    pub fp: Option<Score>,

    /// Optional justification. `None` suppresses the description line, while
    /// `Some("")` is still a present (empty) description.
    #[serde(default, deserialize_with = "lenient_text")]
    pub desc: Option<String>,
}

/// The decomposition returned by a successful analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalysisResult {
    /// Detected functions in display order. `None` when the field was missing
    /// or not an array.
    #[serde(default, deserialize_with = "lenient_functions")]
    pub functions: Option<Vec<FunctionEstimate>>,

    /// Aggregate score.
    #[serde(default, rename = "totalFP", deserialize_with = "lenient_score")]
    pub total_fp: Option<Score>,
}

impl AnalysisResult {
    /// Builds a result from an already parsed response body.
    ///
    /// Total over every JSON value: a body that is not an object yields a
    /// result with both fields absent.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            tracing::debug!(kind = json_kind(&value), "analysis body is not an object");
            return Self::default();
        }

        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "analysis body did not match the result shape");
            Self::default()
        })
    }

    /// Builds a result from a parsed body, or `None` when the body is a falsy
    /// JSON value (`null`, `false`, `0`, `""`). A falsy body still counts as
    /// a successful analysis but has nothing to present.
    #[must_use]
    pub fn from_body(value: Value) -> Option<Self> {
        let falsy = match &value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        };
        if falsy {
            tracing::debug!(kind = json_kind(&value), "analysis body is empty");
            return None;
        }
        Some(Self::from_value(value))
    }

    /// Number of function rows the result carries.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.as_ref().map_or(0, Vec::len)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<Score>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Score::from_value(&value))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

fn lenient_functions<'de, D>(deserializer: D) -> Result<Option<Vec<FunctionEstimate>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    // Entries that are not objects carry nothing renderable.
    let estimates = items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    Ok(Some(estimates))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_complete_result() {
        let result = AnalysisResult::from_value(json!({
            "functions": [
                {"name": "Login", "fp": 3, "desc": "external input"},
                {"name": "CSV export", "fp": 4.5}
            ],
            "totalFP": 7.5
        }));

        let functions = result.functions.as_ref().unwrap();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].name, "Login");
        assert_eq!(functions[0].fp.as_ref().unwrap().to_string(), "3");
        assert_eq!(functions[0].desc.as_deref(), Some("external input"));
        assert_eq!(functions[1].fp.as_ref().unwrap().to_string(), "4.5");
        assert!(functions[1].desc.is_none());
        assert_eq!(result.total_fp.unwrap().to_string(), "7.5");
    }

    #[test]
    fn missing_functions_is_absent_not_empty() {
        let result = AnalysisResult::from_value(json!({"totalFP": 5}));
        assert!(result.functions.is_none());
        assert_eq!(result.total_fp, Some(Score::from(5)));
        assert_eq!(result.function_count(), 0);
    }

    #[test]
    fn empty_description_is_kept() {
        let result = AnalysisResult::from_value(json!({
            "functions": [{"name": "Search", "fp": 2, "desc": ""}]
        }));
        assert_eq!(result.functions.unwrap()[0].desc.as_deref(), Some(""));
    }

    #[test]
    fn mistyped_fields_degrade_to_absent() {
        let result = AnalysisResult::from_value(json!({
            "functions": "not a list",
            "totalFP": {"value": 3}
        }));
        assert!(result.functions.is_none());
        assert!(result.total_fp.is_none());

        let result = AnalysisResult::from_value(json!({
            "functions": [null, 7, {"fp": true, "desc": null}, {"name": 12, "fp": "3"}]
        }));
        let functions = result.functions.unwrap();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0], FunctionEstimate::default());
        assert_eq!(functions[1].name, "12");
        assert_eq!(functions[1].fp, Some(Score::Text("3".to_string())));
    }

    #[test]
    fn non_object_bodies_yield_empty_result() {
        for body in [json!(null), json!([1, 2]), json!("text"), json!(42)] {
            assert_eq!(AnalysisResult::from_value(body), AnalysisResult::default());
        }
    }

    #[test]
    fn falsy_bodies_have_no_result() {
        for body in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert_eq!(AnalysisResult::from_body(body), None);
        }
        for body in [json!({}), json!([]), json!(true), json!(1), json!("x")] {
            assert_eq!(AnalysisResult::from_body(body), Some(AnalysisResult::default()));
        }
    }
}
