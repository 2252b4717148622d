//! User-facing label sets.
//!
//! Japanese is the default and reproduces the original page wording. English
//! is selectable through the `language` configuration key.

/// Every string the UI shows that is not user or server data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub instructions: &'static str,
    pub placeholder: &'static str,
    pub analyze: &'static str,
    pub analyzing: &'static str,
    pub progress: &'static str,
    pub error_title: &'static str,
    pub results_title: &'static str,
    pub function_name: &'static str,
    pub fp: &'static str,
    pub description: &'static str,
    pub total_fp: &'static str,
    pub keybindings: &'static str,
}

const JAPANESE: Labels = Labels {
    title: "ファンクションポイント 自動算出サンプル",
    instructions: "要件を自然言語で入力し、「解析」ボタンを押してください。",
    placeholder: "例: パスワードリセット機能とCSVエクスポート機能が必要",
    analyze: "解析する",
    analyzing: "解析中...",
    progress: "推論中です。お待ちください...",
    error_title: "エラー",
    results_title: "解析結果",
    function_name: "機能名:",
    fp: "FP:",
    description: "説明:",
    total_fp: "合計FP:",
    keybindings: "Enter: 解析 | Alt+Enter: 改行 | Ctrl+u: クリア | ↑↓: スクロール | Esc: 閉じる",
};

const ENGLISH: Labels = Labels {
    title: "Function Point Estimator",
    instructions: "Describe the requirements in plain language, then press Analyze.",
    placeholder: "e.g. We need a password reset feature and CSV export",
    analyze: "Analyze",
    analyzing: "Analyzing...",
    progress: "Running inference, please wait...",
    error_title: "Error",
    results_title: "Analysis Result",
    function_name: "Function:",
    fp: "FP:",
    description: "Description:",
    total_fp: "Total FP:",
    keybindings: "Enter: analyze | Alt+Enter: newline | Ctrl+u: clear | ↑↓: scroll | Esc: close",
};

/// Display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Japanese,
    English,
}

impl Locale {
    /// Parses a language code. Accepts `ja` and `en`, case-insensitively.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ja" => Some(Self::Japanese),
            "en" => Some(Self::English),
            _ => None,
        }
    }

    #[must_use]
    pub const fn labels(self) -> &'static Labels {
        match self {
            Self::Japanese => &JAPANESE,
            Self::English => &ENGLISH,
        }
    }
}
