//! Input box and analyze trigger renderer.

use crate::app::state::{BOX_MARGIN, INPUT_ROWS};
use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBoxInfo;

/// Renders the bordered input box followed by the trigger line.
///
/// # Returns
///
/// The next available row position (row + `INPUT_ROWS` + 3)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐
/// [margin] │ wrapped text    │   × INPUT_ROWS
/// [margin] └─────────────────┘
/// [margin] [ Analyze ]
/// ```
///
/// The cursor block follows the last line of real text. Placeholder text is
/// drawn dimmed with the cursor at its start.
pub fn render_input_box(row: usize, input: &InputBoxInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let text_width = inner_width.saturating_sub(2);
    let margin = " ".repeat(BOX_MARGIN);
    let border = Theme::fg(&theme.colors.input_border);

    position_cursor(row, 1);
    print!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let text_color = if input.is_placeholder {
        Theme::fg(&theme.colors.placeholder_fg)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    for offset in 0..INPUT_ROWS {
        let line = input.lines.get(offset).map_or("", String::as_str);
        let line = truncate_to_width(line, text_width);
        let is_cursor_line = if input.is_placeholder {
            offset == 0
        } else {
            offset + 1 == input.lines.len()
        };

        position_cursor(row + 1 + offset, 1);
        print!("{margin}{border}│{} ", Theme::reset());

        let mut used = display_width(line);
        if is_cursor_line && input.is_placeholder {
            print!("{}▏{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
            used += 1;
        }
        print!("{text_color}{line}{}", Theme::reset());
        if is_cursor_line && !input.is_placeholder && used < text_width {
            print!("{}▏{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
            used += 1;
        }

        print!("{}", " ".repeat(text_width.saturating_sub(used)));
        print!(" {border}│{}", Theme::reset());
    }

    position_cursor(row + 1 + INPUT_ROWS, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    position_cursor(row + 2 + INPUT_ROWS, 1);
    print!("{margin}");
    if input.trigger.enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.trigger_fg));
        print!("{}", Theme::bg(&theme.colors.trigger_bg));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.trigger_disabled_fg));
    }
    print!(" {} ", input.trigger.label);
    print!("{}", Theme::reset());

    row + INPUT_ROWS + 3
}
