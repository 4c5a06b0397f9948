//! Use-Case: Neuen Knoten an einer Position anlegen.

use crate::app::tool_catalog;
use crate::app::view::EditorView;
use crate::app::AppState;
use crate::core::NodeType;
use glam::Vec2;

/// Legt einen Knoten der Art `kind` an `pos` an und gibt seine ID zurück.
///
/// Zustände erhalten vom Diagramm die nächste freie Nummer, alle
/// anderen Arten das Standard-Label. Text-Knoten landen zusätzlich in der
/// Text-Element-Liste. Liegt `pos` rechts oder unterhalb der Zeichenfläche,
/// wächst diese um eine Schrittweite.
pub fn add_node_at(
    state: &mut AppState,
    view: &mut dyn EditorView,
    kind: NodeType,
    pos: Vec2,
) -> u64 {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let name = tool_catalog::node_profile(kind).default_label;
    let id = state.diagram_mut().add_node(kind, name, pos);
    if kind == NodeType::Text {
        state.text_elements.push(id);
    }
    log::info!("Knoten {} ({:?}) angelegt bei {:?}", id, kind, pos);

    grow_surface_if_needed(state, view, pos);
    id
}

fn grow_surface_if_needed(state: &mut AppState, view: &mut dyn EditorView, pos: Vec2) {
    let step = state.options.surface_grow_step;
    let [width, height] = state.ui.surface_size;

    if pos.x > width {
        view.grow_drawing_surface(step, 0.0);
        state.ui.surface_size[0] += step;
    }
    if pos.y > height {
        view.grow_drawing_surface(0.0, step);
        state.ui.surface_size[1] += step;
    }
    if state.ui.surface_size != [width, height] {
        log::debug!("Zeichenfläche vergrößert auf {:?}", state.ui.surface_size);
    }
}
