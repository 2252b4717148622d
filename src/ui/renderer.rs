//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `WorkflowState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers

use crate::app::WorkflowState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Zellij clears the pane before each
/// call, so nothing here erases previous frames.
pub fn render(state: &WorkflowState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    tracing::trace!(
        rows,
        cols,
        phase = state.phase.name(),
        "render"
    );

    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
