//! Use-Case: Elemente löschen (Knoten kaskadieren auf Kanten und deren Aktionen).

use crate::app::use_cases::selection::clear_selection;
use crate::app::AppState;
use crate::core::ElementRef;
use glam::Vec2;

/// Löscht das Element unter `pos`. Gibt `true` zurück, wenn etwas gelöscht wurde.
pub fn delete_at(state: &mut AppState, pos: Vec2) -> bool {
    let Some(hit) = state.diagram.element_at(pos) else {
        log::debug!("Nichts zum Löschen unter {:?}", pos);
        return false;
    };
    delete_element(state, hit)
}

/// Löscht das angeklickte Element.
pub fn delete_selected(state: &mut AppState) -> bool {
    match state.selection.clicked {
        Some(element) if state.diagram.contains_element(element) => delete_element(state, element),
        _ => {
            log::debug!("Nichts zum Löschen selektiert");
            clear_selection(state);
            false
        }
    }
}

fn delete_element(state: &mut AppState, element: ElementRef) -> bool {
    // Snapshot VOR Mutation, damit Undo das Element zurückholt
    state.record_undo_snapshot();

    let removed = state.diagram_mut().delete_element(element);
    if let ElementRef::Node(id) = element {
        state.text_elements.retain(|text_id| *text_id != id);
    }
    clear_selection(state);

    if removed {
        log::info!("Element gelöscht: {:?}", element);
    }
    removed
}
