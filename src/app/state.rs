//! Workflow state and view model computation.
//!
//! [`WorkflowState`] is the single source of truth for the plugin: the text
//! being edited, the lifecycle [`Phase`], and presentation settings. It is
//! created when the plugin loads and discarded with it; nothing is persisted.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` is the Result Presenter. It reads state only and is
//! total over every combination of present and absent result fields.
//!
//! # Example
//!
//! ```rust
//! use fp_analyzer::{Locale, Theme, WorkflowState};
//!
//! let state = WorkflowState::new(Theme::default(), Locale::English);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.input.trigger.enabled);
//! assert!(viewmodel.results.is_none());
//! ```

use super::phase::Phase;
use crate::api::{AnalysisRequest, Settlement};
use crate::domain::{AnalysisResult, FunctionEstimate, Score};
use crate::ui::helpers::wrap_text;
use crate::ui::locale::{Labels, Locale};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AlertInfo, FooterInfo, HeaderInfo, InputBoxInfo, ProgressInfo, ResultRow, ResultsCard,
    TriggerInfo, UIViewModel,
};
use std::time::Instant;

/// Visible text rows inside the input box.
pub const INPUT_ROWS: usize = 5;

/// Horizontal margin around the input box and the alert box.
pub const BOX_MARGIN: usize = 2;

/// Rows taken by everything except result rows when the result card is shown:
/// blank, title, instructions, border, input box (7), trigger, blank, card
/// title, card border, blank, total, footer border, footer.
const FIXED_ROWS_WITH_CARD: usize = 19;

/// Central workflow state container.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    /// Current text of the input box. Mutated on every keystroke.
    pub input_text: String,

    /// Lifecycle phase. Written only by the event handler.
    pub phase: Phase,

    /// Index of the first function row shown in the result card.
    ///
    /// Reset whenever a new analysis starts.
    pub results_scroll: usize,

    /// Language of every user-facing label.
    pub locale: Locale,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// When the in-flight request was issued, for duration logging.
    pub request_started: Option<Instant>,

    /// Terminal height from the last render. Bounds result scrolling.
    pub viewport_rows: Option<usize>,
}

impl WorkflowState {
    /// Creates an idle state with empty input.
    #[must_use]
    pub fn new(theme: Theme, locale: Locale) -> Self {
        Self {
            input_text: String::new(),
            phase: Phase::Idle,
            results_scroll: 0,
            locale,
            theme,
            request_started: None,
            viewport_rows: None,
        }
    }

    /// Records the terminal height the next render uses.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = Some(rows);
    }

    /// Moves into `Loading` and returns the request to send.
    ///
    /// Returns `None` without touching state when a request is already in
    /// flight. Entering `Loading` discards any previous error or result.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if self.phase.is_loading() {
            return None;
        }

        tracing::info!(
            input_len = self.input_text.len(),
            previous_phase = self.phase.name(),
            "analysis started"
        );

        self.phase = Phase::Loading;
        self.results_scroll = 0;
        self.request_started = Some(Instant::now());

        Some(AnalysisRequest::new(self.input_text.clone()))
    }

    /// Applies the outcome of the in-flight request.
    pub fn settle(&mut self, settlement: Settlement) {
        let elapsed_ms = self
            .request_started
            .take()
            .map(|started| started.elapsed().as_millis());
        let status = settlement.status();

        self.phase = match settlement.into_outcome() {
            Ok(result) => {
                tracing::info!(
                    status = ?status,
                    elapsed_ms = ?elapsed_ms,
                    function_count = result.as_ref().map_or(0, AnalysisResult::function_count),
                    has_result = result.is_some(),
                    "analysis succeeded"
                );
                Phase::Success { result }
            }
            Err(e) => {
                tracing::warn!(
                    status = ?status,
                    elapsed_ms = ?elapsed_ms,
                    kind = e.kind(),
                    error = %e,
                    "analysis failed"
                );
                Phase::Error {
                    message: e.to_string(),
                }
            }
        };
    }

    /// Scrolls the result card up. Returns `true` if the view changed.
    pub fn scroll_results_up(&mut self) -> bool {
        if self.results_scroll == 0 {
            return false;
        }
        self.results_scroll -= 1;
        true
    }

    /// Scrolls the result card down. Returns `true` if the view changed.
    ///
    /// Stops once the last row is on screen. Before the first render the
    /// height is unknown and the last row is the limit.
    pub fn scroll_results_down(&mut self) -> bool {
        let Some(result) = self.phase.result() else {
            return false;
        };
        let max_scroll = match self.viewport_rows {
            Some(rows) => last_window_start(result, Self::calculate_result_rows(rows)),
            None => result.function_count().saturating_sub(1),
        };
        if self.results_scroll >= max_scroll {
            return false;
        }
        self.results_scroll += 1;
        true
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let labels = self.locale.labels();

        UIViewModel {
            header: HeaderInfo {
                title: labels.title.to_string(),
                instructions: labels.instructions.to_string(),
            },
            input: self.compute_input_box(labels, cols),
            progress: self.phase.is_loading().then(|| ProgressInfo {
                message: labels.progress.to_string(),
            }),
            alert: self.phase.error_message().map(|message| AlertInfo {
                title: labels.error_title.to_string(),
                message: message.to_string(),
            }),
            results: self
                .phase
                .result()
                .map(|result| self.compute_results_card(result, labels, rows)),
            footer: FooterInfo {
                keybindings: labels.keybindings.to_string(),
            },
        }
    }

    /// Wraps the input text (or the placeholder) into the box and keeps the
    /// last [`INPUT_ROWS`] lines so the end of the text stays visible.
    fn compute_input_box(&self, labels: &Labels, cols: usize) -> InputBoxInfo {
        // Borders, one space of padding per side, and a cell for the cursor.
        let text_width = cols.saturating_sub(BOX_MARGIN * 2 + 5);

        let is_placeholder = self.input_text.is_empty();
        let source = if is_placeholder {
            labels.placeholder
        } else {
            self.input_text.as_str()
        };

        let mut lines = wrap_text(source, text_width);
        if lines.len() > INPUT_ROWS {
            lines.drain(..lines.len() - INPUT_ROWS);
        }

        let loading = self.phase.is_loading();
        InputBoxInfo {
            lines,
            is_placeholder,
            trigger: TriggerInfo {
                label: if loading { labels.analyzing } else { labels.analyze }.to_string(),
                enabled: !loading,
            },
        }
    }

    /// Builds the result card, windowed to the rows left on screen.
    fn compute_results_card(&self, result: &AnalysisResult, labels: &Labels, rows: usize) -> ResultsCard {
        let all_rows: Vec<ResultRow> = result
            .functions
            .iter()
            .flatten()
            .map(|estimate| Self::compute_result_row(estimate, labels))
            .collect();

        let budget = Self::calculate_result_rows(rows);
        let start = self.results_scroll.min(last_window_start(result, budget));

        let mut used = 0;
        let visible: Vec<ResultRow> = all_rows
            .iter()
            .skip(start)
            .take_while(|row| {
                used += row.line_count();
                used <= budget
            })
            .cloned()
            .collect();

        let hidden_above = start;
        let hidden_below = all_rows.len().saturating_sub(start + visible.len());

        ResultsCard {
            title: labels.results_title.to_string(),
            rows: visible,
            total: format!("{} {}", labels.total_fp, display_score(result.total_fp.as_ref())),
            hidden_above,
            hidden_below,
        }
    }

    fn compute_result_row(estimate: &FunctionEstimate, labels: &Labels) -> ResultRow {
        ResultRow {
            summary: format!(
                "{} {} / {} {}",
                labels.function_name,
                estimate.name,
                labels.fp,
                display_score(estimate.fp.as_ref())
            ),
            description: estimate
                .desc
                .as_ref()
                .map(|desc| format!("{} {desc}", labels.description)),
        }
    }

    /// Rows available for function rows inside the result card.
    const fn calculate_result_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(FIXED_ROWS_WITH_CARD)
    }
}

/// Index of the first row when the window is scrolled to the end: the
/// smallest start whose rows all fit in `budget` lines. When not even the
/// last row fits, that row is the start.
fn last_window_start(result: &AnalysisResult, budget: usize) -> usize {
    let functions = result.functions.as_deref().unwrap_or_default();

    let mut used = 0;
    let fitting = functions
        .iter()
        .rev()
        .take_while(|estimate| {
            used += if estimate.desc.is_some() { 2 } else { 1 };
            used <= budget
        })
        .count();

    if fitting == 0 {
        functions.len().saturating_sub(1)
    } else {
        functions.len() - fitting
    }
}

/// Missing scores render as empty text.
fn display_score(score: Option<&Score>) -> String {
    score.map(ToString::to_string).unwrap_or_default()
}
