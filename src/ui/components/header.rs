//! Header component renderer.
//!
//! Renders the centered title and the instructions line under it.

use crate::ui::helpers::{center_padding, display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title at `row` and the instructions below it.
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// [left padding] instructions [right padding]
/// ```
///
/// Padding is measured in terminal cells, so full-width titles center
/// correctly. Text wider than the terminal is cut.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate_to_width(&header.title, cols);
    let padding = center_padding(title, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + display_width(title))));
    print!("{}", Theme::reset());

    let instructions = truncate_to_width(&header.instructions, cols);
    let padding = center_padding(instructions, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{instructions}");
    print!("{}", Theme::reset());

    row + 2
}
