//! Use-Case: Kontextmenü für das angeklickte Element.

use crate::app::tool_catalog;
use crate::app::view::{ContextMenuSpec, EditorView};
use crate::app::AppState;
use crate::core::ElementRef;
use glam::Vec2;

/// Zeigt das Kontextmenü, wenn `pos` das angeklickte Element, sein Label
/// oder sein Pivot trifft.
pub fn show_context_menu_at(state: &mut AppState, view: &mut dyn EditorView, pos: Vec2) {
    let Some(element) = state.selection.clicked else {
        return;
    };

    let diagram = &state.diagram;
    let hit = diagram.element_contains(element, pos)
        || matches!(element, ElementRef::Edge(id)
            if diagram.edge_label_contains(id, pos) || diagram.edge_pivot_contains(id, pos));
    if !hit {
        return;
    }

    let Some(profile) = tool_catalog::element_profile(diagram, element) else {
        return;
    };
    let menu = ContextMenuSpec {
        element,
        edit_label: profile.menu_label,
        show_edit_functions: profile.edit_functions,
    };
    view.show_context_menu(pos, &menu);
    state.ui.context_menu = Some(menu);
}

/// Schließt ein offenes Kontextmenü.
pub fn hide_context_menu(state: &mut AppState, view: &mut dyn EditorView) {
    view.hide_context_menu();
    state.ui.context_menu = None;
}
