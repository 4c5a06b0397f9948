//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        diagram: state.diagram.clone(),
        selected: state
            .selection
            .clicked
            .filter(|element| state.diagram.contains_element(*element)),
        edge_preview: state.interaction.edge_preview,
        surface_size: state.ui.surface_size,
    }
}
