//! Handler für Zeiger-, Selektions- und Kontextmenü-Operationen.

use crate::app::use_cases;
use crate::app::view::EditorView;
use crate::app::AppState;
use glam::Vec2;

/// Schließt ein offenes Kontextmenü.
pub fn hide_context_menu(state: &mut AppState, view: &mut dyn EditorView) {
    use_cases::selection::hide_context_menu(state, view);
}

/// Merkt die Zeigerposition als Ausgangspunkt für das nächste Zieh-Delta.
pub fn record_pointer(state: &mut AppState, pos: Vec2) {
    state.interaction.last_pointer = Some(pos);
}

/// Führt das Klick-Protokoll im Selektionsmodus aus.
pub fn select_at(state: &mut AppState, view: &mut dyn EditorView, pos: Vec2, timestamp_ms: u64) {
    use_cases::selection::select_at(state, view, pos, timestamp_ms);
}

pub fn show_context_menu(state: &mut AppState, view: &mut dyn EditorView, pos: Vec2) {
    use_cases::selection::show_context_menu_at(state, view, pos);
}

/// Zieht das angeklickte Element bzw. den gegriffenen Handle.
pub fn drag_to(state: &mut AppState, pos: Vec2) {
    use_cases::selection::drag_selection_to(state, pos);
}

pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}

pub fn request_repaint(view: &mut dyn EditorView) {
    view.request_repaint();
}
