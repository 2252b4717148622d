//! Progress indicator renderer.
//!
//! Plugin frames are only drawn on events, so the indicator is a static
//! striped bar rather than an animation.

use crate::app::state::BOX_MARGIN;
use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ProgressInfo;

/// Renders the bar and the waiting message. Returns row + 2.
pub fn render_progress(row: usize, progress: &ProgressInfo, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(BOX_MARGIN * 2);
    let margin = " ".repeat(BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}", Theme::fg(&theme.colors.progress_fg));
    print!("{}", "▰▱".repeat(width / 2));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{margin}{}", Theme::fg(&theme.colors.progress_fg));
    print!("{}", truncate_to_width(&progress.message, width));
    print!("{}", Theme::reset());

    row + 2
}
