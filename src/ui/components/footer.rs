//! Footer component renderer.

use crate::ui::helpers::{center_padding, display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered at `row`.
///
/// Text wider than the terminal is truncated so narrow panes keep their
/// layout.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_to_width(&footer.keybindings, cols);
    let padding = center_padding(help_text, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + display_width(help_text))));
    print!("{}", Theme::reset());
    row + 1
}
