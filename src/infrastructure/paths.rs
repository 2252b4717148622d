//! Path helpers for the Zellij sandbox.

use std::path::PathBuf;

/// File name of the OTLP trace file inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "fp-analyzer-otlp.json";

/// Directory for plugin-owned files (currently only traces).
///
/// `/host` is the cwd of the focused terminal, or where Zellij was started,
/// which normally makes this `~/.local/share/zellij/fp-analyzer`.
///
/// ```
/// use fp_analyzer::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/fp-analyzer"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("fp-analyzer")
}

/// Maps `~` and `~/...` onto `/host`; other paths pass through unchanged.
///
/// ```
/// use fp_analyzer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        "/host".to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("/host/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_start() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        let path = get_data_dir().join(TRACE_FILE_NAME);
        assert!(path.ends_with("fp-analyzer/fp-analyzer-otlp.json"));
    }
}
