//! Handler für Undo-Operationen.

use crate::app::use_cases::selection::clear_selection;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    if let Some(prev) = state.history.pop_undo() {
        prev.apply_to(state);
        clear_selection(state);
        state.interaction.reset();
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}
