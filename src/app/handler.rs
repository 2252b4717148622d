//! Event handling and state transition logic.
//!
//! This module is the Analysis Controller. It processes user input and request
//! settlements, mutates [`WorkflowState`], and returns the actions the plugin
//! runtime must execute.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin runtime (keys, web request completions)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `WorkflowState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Newline`, `Backspace`, `ClearInput`
//! - **Workflow**: `Analyze`, `AnalysisSettled`
//! - **View**: `ScrollUp`, `ScrollDown`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use fp_analyzer::{handle_event, Action, Event, Locale, Theme, WorkflowState};
//!
//! let mut state = WorkflowState::new(Theme::default(), Locale::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Analyze)?;
//! assert!(should_render);
//! assert!(matches!(actions[0], Action::SubmitAnalysis(_)));
//! # Ok::<(), fp_analyzer::AnalyzerError>(())
//! ```

use crate::api::Settlement;
use crate::app::{Action, WorkflowState};
use crate::domain::error::Result;

/// Events triggered by user input or request completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the input text.
    Char(char),
    /// Appends a line break to the input text.
    Newline,
    /// Removes the last character of the input text.
    Backspace,
    /// Empties the input text.
    ClearInput,

    /// Starts an analysis of the current input text.
    Analyze,

    /// Reports how the in-flight analysis call ended.
    AnalysisSettled(Settlement),

    /// Scrolls the result card up by one function.
    ScrollUp,
    /// Scrolls the result card down by one function.
    ScrollDown,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates workflow state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. Input editing is accepted in every
/// phase; `Analyze` is suppressed while a request is in flight.
///
/// # Errors
///
/// Currently infallible; every workflow failure is folded into the `Error`
/// phase rather than returned.
pub fn handle_event(state: &mut WorkflowState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, phase = state.phase.name()).entered();

    match event {
        Event::Char(c) => {
            state.input_text.push(*c);
            tracing::trace!(input_len = state.input_text.len(), "input updated");
            Ok((true, vec![]))
        }
        Event::Newline => {
            state.input_text.push('\n');
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let removed = state.input_text.pop().is_some();
            Ok((removed, vec![]))
        }
        Event::ClearInput => {
            let had_text = !state.input_text.is_empty();
            state.input_text.clear();
            Ok((had_text, vec![]))
        }
        Event::Analyze => state.begin_analysis().map_or_else(
            || {
                tracing::debug!("analysis already in flight, trigger suppressed");
                Ok((false, vec![]))
            },
            |request| Ok((true, vec![Action::SubmitAnalysis(request)])),
        ),
        Event::AnalysisSettled(settlement) => {
            if !state.phase.is_loading() {
                tracing::debug!(
                    status = ?settlement.status(),
                    "settlement without a request in flight, ignoring"
                );
                return Ok((false, vec![]));
            }

            state.settle(settlement.clone());
            Ok((true, vec![]))
        }
        Event::ScrollUp => Ok((state.scroll_results_up(), vec![])),
        Event::ScrollDown => Ok((state.scroll_results_down(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}
