//! Handler für Editing-Operationen (Knoten, Kanten, Aktionen, Dialoge).

use crate::app::use_cases;
use crate::app::view::EditorView;
use crate::app::AppState;
use crate::core::{EdgeType, NodeType};
use glam::Vec2;

/// Fügt einen Knoten an der Position hinzu.
pub fn add_node(state: &mut AppState, view: &mut dyn EditorView, kind: NodeType, pos: Vec2) {
    use_cases::editing::add_node_at(state, view, kind, pos);
}

/// Beginnt eine Kante am Knoten unter `pos`.
pub fn begin_edge(state: &mut AppState, kind: EdgeType, pos: Vec2) {
    use_cases::editing::begin_edge_at(state, kind, pos);
}

pub fn update_preview(state: &mut AppState, pos: Vec2) {
    use_cases::editing::update_edge_preview(state, pos);
}

/// Schließt die angefangene Kante am Knoten unter `pos` ab.
pub fn finish_edge(state: &mut AppState, pos: Vec2) {
    use_cases::editing::finish_edge_at(state, pos);
}

pub fn add_action(state: &mut AppState, pos: Vec2) {
    use_cases::editing::add_action_at(state, pos);
}

/// Löscht das Element unter `pos`.
pub fn delete_at(state: &mut AppState, pos: Vec2) {
    use_cases::editing::delete_at(state, pos);
}

/// Löscht das angeklickte Element.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Öffnet den Bearbeiten-Dialog für das angeklickte Element.
pub fn edit_selected(state: &mut AppState, view: &mut dyn EditorView) {
    use_cases::editing::edit_selected(state, view);
}

pub fn edit_functions(state: &mut AppState, view: &mut dyn EditorView) {
    use_cases::editing::edit_functions(state, view);
}
