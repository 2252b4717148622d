//! fp-analyzer: a Zellij plugin for function-point estimation.
//!
//! The user types a natural-language feature description, presses `Enter`,
//! and the plugin posts it to an estimation service. The answer is shown as
//! one row per detected function with its FP score, followed by the total.
//!
//! - One request in flight at a time; the trigger is disabled while loading
//! - Lenient decoding: missing or oddly typed fields render as empty text
//! - Japanese or English labels, Catppuccin themes
//! - File-based OpenTelemetry tracing

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Analysis controller
//! │  - Event handling, phase state machine              │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐        ┌─────────────────────────┐
//! │ UI Layer (ui/)    │        │ API Layer (api/)        │
//! │ - Rendering       │        │ - Request encoding      │
//! │ - Theming, locale │        │ - Settlement decoding   │
//! └───────────────────┘        └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Result model, error types (domain/)              │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/fp-analyzer.wasm" {
//!         endpoint "http://localhost:3000/api/analyze"
//!         language "ja"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fp_analyzer::api::Settlement;
//! use fp_analyzer::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "CSV export".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Analyze)?;
//! assert_eq!(actions.len(), 1);
//!
//! let body = br#"{"functions":[{"name":"Export","fp":4}],"totalFP":4}"#.to_vec();
//! handle_event(&mut state, &Event::AnalysisSettled(Settlement::Response { status: 200, body }))?;
//! assert_eq!(state.phase.result().map(|r| r.function_count()), Some(1));
//! # Ok::<(), fp_analyzer::AnalyzerError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, map_key, Action, Event, Phase, WorkflowState};
pub use domain::{AnalysisError, AnalysisResult, AnalyzerError, FunctionEstimate, Result, Score};
pub use ui::{Locale, Theme};

use std::collections::BTreeMap;

/// Endpoint used when the layout does not set one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/analyze";

const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/fp-analyzer.wasm" {
///     endpoint "https://fp.example.com/api/analyze"
///     language "en"
///     theme_file "~/.config/fp-analyzer/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL the analysis request is posted to.
    pub endpoint: String,

    /// Label language. `ja` (default) or `en`.
    pub locale: Locale,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            locale: Locale::default(),
            theme_name: None,
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset. An unknown `language` falls back to
    /// Japanese.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fp_analyzer::{Config, Locale};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "http://10.0.0.5/api/analyze".to_string());
    /// map.insert("language".to_string(), "en".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "http://10.0.0.5/api/analyze");
    /// assert_eq!(config.locale, Locale::English);
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let locale = get("language").map_or_else(Locale::default, |code| {
            Locale::from_code(&code).unwrap_or_else(|| {
                tracing::debug!(language = %code, "unknown language, using default");
                Locale::default()
            })
        });

        Self {
            endpoint: get("endpoint").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            locale,
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level").unwrap_or_else(|| DEFAULT_TRACE_LEVEL.to_string()),
        }
    }

    /// Resolves the theme: file first, then built-in name, then default.
    /// Failures are logged and fall through to the next option.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %path, error = %e, "failed to load theme file");
                }
            }
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates an idle [`WorkflowState`] from configuration.
#[must_use]
pub fn initialize(config: &Config) -> WorkflowState {
    tracing::debug!(locale = ?config.locale, "initializing fp-analyzer");
    WorkflowState::new(config.resolve_theme(), config.locale)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(Config::default().endpoint, DEFAULT_ENDPOINT);
        assert_eq!(Config::default().locale, Locale::Japanese);
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("endpoint", "  "), ("theme", "")]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn unknown_language_falls_back_to_japanese() {
        let config = Config::from_zellij(&map(&[("language", "de")]));
        assert_eq!(config.locale, Locale::Japanese);
    }

    #[test]
    fn theme_name_is_resolved() {
        let config = Config::from_zellij(&map(&[("theme", "catppuccin-latte")]));
        assert_eq!(config.resolve_theme().name, "catppuccin-latte");

        let config = Config::from_zellij(&map(&[("theme", "nope")]));
        assert_eq!(config.resolve_theme(), Theme::default());
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = NamedTempFile::new().unwrap();
        let custom = toml::to_string(&Theme::default())
            .unwrap()
            .replace("catppuccin-mocha", "from-file");
        write!(file, "{custom}").unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "from-file");
    }

    #[test]
    fn unreadable_theme_file_falls_back_to_name() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some("/no/such/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "catppuccin-frappe");
    }

    #[test]
    fn initialize_starts_idle() {
        let state = initialize(&Config::from_zellij(&map(&[("language", "en")])));
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.locale, Locale::English);
        assert!(state.input_text.is_empty());
    }
}
