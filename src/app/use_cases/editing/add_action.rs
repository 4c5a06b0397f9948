//! Use-Case: Aktion an die getroffene Kante hängen.

use crate::app::tool_catalog;
use crate::app::AppState;
use crate::core::ElementRef;
use glam::Vec2;

/// Hängt eine Aktion mit Standard-Code an die Kante unter `pos`.
///
/// Der Snapshot wird in jedem Fall erzeugt; ohne getroffene Kante entsteht nichts.
pub fn add_action_at(state: &mut AppState, pos: Vec2) -> Option<u64> {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let Some(ElementRef::Edge(edge_id)) = state.diagram.element_at(pos) else {
        log::debug!("Keine Kante unter {:?}, keine Aktion angelegt", pos);
        return None;
    };

    let code = tool_catalog::ACTION.default_label;
    let id = state.diagram_mut().add_action(edge_id, code, pos)?;
    log::info!("Aktion {} an Kante {} angelegt", id, edge_id);
    Some(id)
}
