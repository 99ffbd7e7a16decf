//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process: transform `AppState` into a
//! `UIViewModel`, then delegate to the component renderers. The loading and
//! failure phases short-circuit before any projection happens.

use crate::app::modes::LoadPhase;
use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output using `print!`; does not clear the screen or
/// manage cursor visibility, both of which the host handles.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    match &state.phase {
        LoadPhase::Loading => {
            components::render_loading(&state.theme, rows, cols);
        }
        LoadPhase::Failed(_) => {
            components::render_load_failure(&state.theme, rows, cols);
        }
        LoadPhase::Ready => {
            let viewmodel = state.compute_viewmodel(rows, cols);
            components::render_ready_mode(&viewmodel, &state.theme, cols, rows);
            if let Some(modal) = &viewmodel.modal {
                components::render_modal(modal, &state.theme, rows, cols);
            }
        }
    }
}
