//! Theme management and ANSI escape sequence generation.
//!
//! Supports built-in themes (Catppuccin variants) and custom themes loaded
//! from TOML files, plus helpers for turning hex colors into ANSI escapes.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#89b4fa"
//! placeholder_fg = "#6c7086"
//! trigger_fg = "#1e1e2e"
//! trigger_bg = "#89b4fa"
//! trigger_disabled_fg = "#6c7086"
//! progress_fg = "#89b4fa"
//! alert_fg = "#f38ba8"
//! alert_border = "#f38ba8"
//! result_accent = "#a6e3a1"
//! total_fg = "#f9e2af"
//! ```
//!
//! # Example
//!
//! ```rust
//! use fp_analyzer::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! assert!(Theme::fg(&theme.colors.header_fg).starts_with("\u{1b}[38;2;"));
//! ```

use crate::domain::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title color.
    pub header_fg: String,
    /// Optional title background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Instructions, footer and scroll hints.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    pub input_border: String,
    pub placeholder_fg: String,

    /// Enabled analyze trigger.
    pub trigger_fg: String,
    pub trigger_bg: String,
    /// Trigger while a request is in flight.
    pub trigger_disabled_fg: String,

    pub progress_fg: String,

    pub alert_fg: String,
    pub alert_border: String,

    /// Result card title and row labels.
    pub result_accent: String,
    pub total_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` for an unknown name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Io`] if the file cannot be read and
    /// [`AnalyzerError::Theme`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| AnalyzerError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Mocha palette compiled in, used if the bundled TOML ever fails to parse.
    fn fallback() -> Self {
        let c = |hex: &str| hex.to_string();
        Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors {
                header_fg: c("#cba6f7"),
                header_bg: None,
                text_normal: c("#cdd6f4"),
                text_dim: c("#6c7086"),
                border: c("#45475a"),
                input_border: c("#89b4fa"),
                placeholder_fg: c("#6c7086"),
                trigger_fg: c("#1e1e2e"),
                trigger_bg: c("#89b4fa"),
                trigger_disabled_fg: c("#6c7086"),
                progress_fg: c("#89b4fa"),
                alert_fg: c("#f38ba8"),
                alert_border: c("#f38ba8"),
                result_accent: c("#a6e3a1"),
                total_fg: c("#f9e2af"),
            },
        }
    }

    /// Converts a hex color to an RGB tuple. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(|| {
            tracing::warn!("bundled catppuccin-mocha theme failed to parse, using compiled palette");
            Self::fallback()
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn all_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_matches_bundled_mocha() {
        assert_eq!(Theme::default(), Theme::fallback());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_loads() {
        let mut file = NamedTempFile::new().unwrap();
        let mocha = toml::to_string(&Theme::fallback()).unwrap();
        write!(file, "{}", mocha.replace("catppuccin-mocha", "mine")).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
    }

    #[test]
    fn invalid_theme_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "name = 3").unwrap();
        assert!(matches!(
            Theme::from_file(file.path()),
            Err(AnalyzerError::Theme(_))
        ));
        assert!(matches!(
            Theme::from_file("/definitely/not/here.toml"),
            Err(AnalyzerError::Io(_))
        ));
    }
}
