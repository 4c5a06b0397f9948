//! Handler für Modus-Wechsel und Abschluss von Menü-Aktionen.

use crate::app::state::EditorMode;
use crate::app::use_cases::selection::{clear_selection, hide_context_menu};
use crate::app::view::EditorView;
use crate::app::AppState;

/// Wechselt den Modus; eine angefangene Kante und gegriffene Handles verfallen.
pub fn set_mode(state: &mut AppState, view: &mut dyn EditorView, mode: EditorMode) {
    state.mode = mode;
    state.interaction.reset();
    view.change_cursor(mode);
    log::debug!("Modus: {:?}", mode);
}

pub fn reset_to_selecting(state: &mut AppState, view: &mut dyn EditorView) {
    state.mode = EditorMode::Selecting;
    view.change_cursor(EditorMode::Selecting);
}

/// Verwirft die angefangene Kante samt Vorschau.
pub fn cancel_pending_edge(state: &mut AppState) {
    if state.interaction.pending_edge.is_some() {
        log::debug!("Angefangene Kante verworfen");
    }
    state.interaction.cancel_pending_edge();
}

/// Menü schließen, Selektion aufheben, neu zeichnen.
pub fn complete_command(state: &mut AppState, view: &mut dyn EditorView) {
    hide_context_menu(state, view);
    clear_selection(state);
    view.request_repaint();
}

pub fn set_surface_size(state: &mut AppState, size: [f32; 2]) {
    state.ui.surface_size = size;
}
