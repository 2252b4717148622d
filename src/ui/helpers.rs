//! Shared rendering utilities and helpers.
//!
//! Terminal columns are not characters: CJK ideographs, kana and full-width
//! forms take two cells. Everything here measures in cells so Japanese labels
//! and input center, wrap and truncate correctly.
//!
//! # Example
//!
//! ```rust
//! use fp_analyzer::ui::helpers::{display_width, wrap_text};
//!
//! assert_eq!(display_width("FP"), 2);
//! assert_eq!(display_width("解析"), 4);
//! assert_eq!(wrap_text("abcdef", 4), vec!["abcd".to_string(), "ef".to_string()]);
//! ```

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Cells occupied by one character.
#[must_use]
pub const fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1F64F
        | 0x1F900..=0x1F9FF
        | 0x20000..=0x3FFFD => 2,
        0x00..=0x1F | 0x7F => 0,
        _ => 1,
    }
}

/// Cells occupied by a string.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Longest prefix of `text` that fits in `width` cells.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        used += char_width(c);
        if used > width {
            return &text[..idx];
        }
    }
    text
}

/// Splits text on line breaks, then hard-wraps each line at `width` cells.
///
/// Empty lines are kept so a trailing newline shows as a fresh line. A width
/// of zero is treated as one cell.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for source in text.split('\n') {
        let mut current = String::new();
        let mut used = 0;

        for c in source.chars() {
            let w = char_width(c);
            if used + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(c);
            used += w;
        }

        lines.push(current);
    }

    lines
}

/// Left padding that centers `text` in `cols` cells.
#[must_use]
pub fn center_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(display_width(text)) / 2
}
