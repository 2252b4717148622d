//! Composable UI component renderers.
//!
//! Each component draws one region of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title and instructions
//! - [`input`]: Input box and analyze trigger
//! - [`progress`]: Waiting indicator while a request is in flight
//! - [`alert`]: Error alert after a failed cycle
//! - [`results`]: Result card after a successful cycle
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header - 2 lines]
//! [Border]
//! [Input Box - 7 lines]
//! [Trigger]
//! [blank line]
//! [Progress | Alert | Results | nothing]
//! [Border]
//! [Footer]
//! ```

mod alert;
mod footer;
mod header;
mod input;
mod progress;
mod results;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use alert::render_alert;
use footer::render_footer;
use header::render_header;
use input::render_input_box;
use progress::render_progress;
use results::render_results;

/// Renders a horizontal border line at `row` and returns `row + 1`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole screen for one frame.
///
/// The status region under the trigger shows whichever of progress, alert or
/// results the view model carries.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_input_box(current_row, &vm.input, theme, cols);
    current_row += 1;

    let footer_start = rows.max(2);
    let border_row = footer_start.saturating_sub(1);
    let last_content_row = border_row.saturating_sub(1);

    if let Some(progress) = &vm.progress {
        render_progress(current_row, progress, theme, cols);
    } else if let Some(alert) = &vm.alert {
        render_alert(current_row, alert, theme, cols, last_content_row);
    } else if let Some(card) = &vm.results {
        render_results(current_row, card, theme, cols, last_content_row);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
