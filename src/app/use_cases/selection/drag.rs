//! Use-Case: Angeklicktes Element bzw. gegriffenes Handle ziehen.
//!
//! Pro Klick entsteht höchstens ein Snapshot. Hat das Drücken keinen erzeugt
//! (Element war schon selektiert), holt die erste echte Bewegung ihn nach.

use crate::app::state::{DragHandle, EditorMode};
use crate::app::AppState;
use crate::core::ElementRef;
use glam::Vec2;

/// Wendet die Zeigerbewegung seit dem letzten Event auf die Selektion an.
pub fn drag_selection_to(state: &mut AppState, pos: Vec2) {
    let Some(last) = state.interaction.last_pointer.replace(pos) else {
        return;
    };
    if state.mode != EditorMode::Selecting {
        return;
    }
    let Some(selected) = state.selection.clicked else {
        return;
    };

    let delta = pos - last;
    let handle = state.interaction.handle;
    // Kanten ohne gegriffenes Handle bleiben liegen
    if matches!(selected, ElementRef::Edge(_))
        && !matches!(handle, DragHandle::EdgeLabel | DragHandle::EdgePivot)
    {
        return;
    }
    if delta != Vec2::ZERO
        && !state.interaction.press_snapshot_taken
        && state.diagram.contains_element(selected)
    {
        state.record_undo_snapshot();
        state.interaction.press_snapshot_taken = true;
    }

    let moved = match (selected, handle) {
        (ElementRef::Node(id), _) => state.diagram_mut().move_node(id, delta),
        (ElementRef::Edge(id), DragHandle::EdgeLabel) => {
            state.diagram_mut().move_edge_label(id, delta)
        }
        (ElementRef::Edge(id), DragHandle::EdgePivot) => {
            state.diagram_mut().move_edge_pivot(id, delta)
        }
        (ElementRef::Edge(_), _) => return,
        (ElementRef::Action(id), DragHandle::ActionPivot) => {
            state.diagram_mut().set_action_pivot(id, pos)
        }
        (ElementRef::Action(id), _) => state.diagram_mut().move_action(id, delta),
    };

    if !moved {
        log::debug!("Ziehen ohne Wirkung: {:?} existiert nicht", selected);
    }
}

/// Löst alle Zieh-Handles (Zeiger losgelassen).
pub fn end_drag(state: &mut AppState) {
    state.interaction.handle = DragHandle::None;
    state.interaction.press_snapshot_taken = false;
}
