//! Result card renderer.
//!
//! Shows one row per function estimate in response order, an optional
//! description line under each, and the total at the bottom. Rows that do not
//! fit are counted in the title as scroll hints.

use crate::app::state::BOX_MARGIN;
use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultRow, ResultsCard};

/// Renders the card starting at `row`, stopping at `last_row`.
///
/// The total keeps its line whenever the title and border fit; function rows
/// that would run past it are left out.
///
/// # Returns
///
/// The next available row position
///
/// # Layout
///
/// ```text
/// [margin] Analysis Result               ↑1 ↓3
/// [margin] ─────────────────────────────────────
/// [margin] • Function: Login / FP: 3
/// [margin]     Description: ...
/// [blank]
/// [margin] Total FP: 3
/// ```
pub fn render_results(row: usize, card: &ResultsCard, theme: &Theme, cols: usize, last_row: usize) -> usize {
    if row + 1 > last_row {
        return row;
    }

    let width = cols.saturating_sub(BOX_MARGIN * 2);
    let margin = " ".repeat(BOX_MARGIN);

    let hints = scroll_hints(card);
    let title = truncate_to_width(&card.title, width.saturating_sub(display_width(&hints) + 1));

    position_cursor(row, 1);
    print!("{margin}{}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.result_accent), Theme::reset());
    if !hints.is_empty() {
        let gap = width.saturating_sub(display_width(title) + display_width(&hints));
        print!("{}", " ".repeat(gap));
        print!("{}{hints}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }

    position_cursor(row + 1, 1);
    print!("{margin}{}{}{}", Theme::fg(&theme.colors.border), "─".repeat(width), Theme::reset());

    let mut current_row = row + 2;
    let shown = rows_that_fit(current_row, &card.rows, last_row);
    for result_row in &card.rows[..shown] {
        current_row = render_row(current_row, result_row, theme, width);
    }

    current_row += 1;
    if current_row > last_row {
        return current_row;
    }
    position_cursor(current_row, 1);
    print!("{margin}{}{}", Theme::bold(), Theme::fg(&theme.colors.total_fg));
    print!("{}", truncate_to_width(&card.total, width));
    print!("{}", Theme::reset());

    current_row + 1
}

/// Number of leading rows that fit between `first_row` and `last_row` with a
/// blank line and the total still below them.
fn rows_that_fit(first_row: usize, rows: &[ResultRow], last_row: usize) -> usize {
    let limit = last_row.saturating_sub(2);
    let mut next_row = first_row;
    rows.iter()
        .take_while(|result_row| {
            next_row += result_row.line_count();
            next_row - 1 <= limit
        })
        .count()
}

fn render_row(row: usize, result_row: &ResultRow, theme: &Theme, width: usize) -> usize {
    let margin = " ".repeat(BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}• {}", Theme::fg(&theme.colors.result_accent), Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", truncate_to_width(&result_row.summary, width.saturating_sub(2)));
    print!("{}", Theme::reset());

    let Some(description) = &result_row.description else {
        return row + 1;
    };

    position_cursor(row + 1, 1);
    print!("{margin}    {}", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate_to_width(description, width.saturating_sub(4)));
    print!("{}", Theme::reset());
    row + 2
}

/// `↑n ↓m` for rows outside the window, empty when everything fits.
fn scroll_hints(card: &ResultsCard) -> String {
    let mut hints = Vec::new();
    if card.hidden_above > 0 {
        hints.push(format!("↑{}", card.hidden_above));
    }
    if card.hidden_below > 0 {
        hints.push(format!("↓{}", card.hidden_below));
    }
    hints.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_row(description: Option<&str>) -> ResultRow {
        ResultRow {
            summary: "Function: A / FP: 1".to_string(),
            description: description.map(str::to_string),
        }
    }

    fn card(hidden_above: usize, hidden_below: usize) -> ResultsCard {
        ResultsCard {
            title: "Analysis Result".to_string(),
            rows: vec![],
            total: "Total FP: 0".to_string(),
            hidden_above,
            hidden_below,
        }
    }

    #[test]
    fn hints_only_for_hidden_rows() {
        assert_eq!(scroll_hints(&card(0, 0)), "");
        assert_eq!(scroll_hints(&card(2, 0)), "↑2");
        assert_eq!(scroll_hints(&card(1, 3)), "↑1 ↓3");
    }

    #[test]
    fn rows_stop_before_the_total() {
        let rows = vec![result_row(None), result_row(Some("d")), result_row(None)];

        // Rows from 10, total on 15: room for lines 10..=13.
        assert_eq!(rows_that_fit(10, &rows, 15), 3);
        assert_eq!(rows_that_fit(10, &rows, 14), 2);
        assert_eq!(rows_that_fit(10, &rows, 13), 1);
        assert_eq!(rows_that_fit(10, &rows, 12), 1);
        assert_eq!(rows_that_fit(10, &rows, 11), 0);
        assert_eq!(rows_that_fit(10, &rows, 0), 0);
    }

    #[test]
    fn rendering_never_passes_last_row() {
        let theme = Theme::default();
        let mut full = card(0, 0);
        full.rows = vec![result_row(Some("d")); 4];

        assert!(render_results(10, &full, &theme, 80, 30) <= 31);
        assert!(render_results(10, &full, &theme, 80, 14) <= 15);
        assert_eq!(render_results(10, &full, &theme, 80, 10), 10);
    }
}
