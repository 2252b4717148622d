//! Error alert renderer.

use crate::app::state::BOX_MARGIN;
use crate::ui::helpers::{display_width, position_cursor, truncate_to_width, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AlertInfo;

/// Renders a bordered alert box holding the error title and message.
///
/// The message wraps inside the box and stops at `last_row`, leaving the
/// footer untouched.
///
/// # Returns
///
/// The next available row position
///
/// # Layout
///
/// ```text
/// [margin] ┌─ Error ─────────────┐
/// [margin] │ API Error: 500      │
/// [margin] └─────────────────────┘
/// ```
pub fn render_alert(row: usize, alert: &AlertInfo, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let box_width = cols.saturating_sub(BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let text_width = inner_width.saturating_sub(2);
    let margin = " ".repeat(BOX_MARGIN);
    let border = Theme::fg(&theme.colors.alert_border);

    if row + 2 > last_row {
        return row;
    }

    let title = truncate_to_width(&alert.title, inner_width.saturating_sub(3));
    let title_fill = inner_width.saturating_sub(display_width(title) + 3);

    position_cursor(row, 1);
    print!("{margin}{border}┌─ ");
    print!("{}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.alert_fg), Theme::reset());
    print!("{border} {}┐{}", "─".repeat(title_fill), Theme::reset());

    let mut current_row = row + 1;
    for line in wrap_text(&alert.message, text_width) {
        if current_row + 1 > last_row {
            break;
        }
        position_cursor(current_row, 1);
        print!("{margin}{border}│{} ", Theme::reset());
        print!("{}{line}{}", Theme::fg(&theme.colors.alert_fg), Theme::reset());
        print!("{}", " ".repeat(text_width.saturating_sub(display_width(&line))));
        print!(" {border}│{}", Theme::reset());
        current_row += 1;
    }

    position_cursor(current_row, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    current_row + 1
}
