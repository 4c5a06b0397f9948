//! Use-Case: Kante per Drücken auf die Quelle und Loslassen auf dem Ziel anlegen.

use crate::app::state::PendingEdge;
use crate::app::tool_catalog;
use crate::app::AppState;
use crate::core::{third_point_with_ratio, EdgeType, ElementRef};
use crate::shared::{EdgePreview, PreviewStyle};
use glam::Vec2;

/// Merkt den Knoten unter `pos` als Quelle und startet die Vorschau.
pub fn begin_edge_at(state: &mut AppState, kind: EdgeType, pos: Vec2) {
    let Some(ElementRef::Node(source)) = state.diagram.element_at(pos) else {
        log::debug!("Kein Quell-Knoten unter {:?}", pos);
        return;
    };
    let Some(start) = state.diagram.node(source).map(|n| n.center) else {
        return;
    };

    state.record_undo_snapshot();
    state.interaction.pending_edge = Some(PendingEdge { source, kind });
    state.interaction.edge_preview = Some(EdgePreview {
        start,
        end: pos,
        pivot: preview_pivot(state, start, pos),
        style: match kind {
            EdgeType::Operation => PreviewStyle::Operation,
            _ => PreviewStyle::Default,
        },
    });
}

/// Führt die Vorschau-Linie dem Zeiger nach. Keine Mutation des Diagramms.
pub fn update_edge_preview(state: &mut AppState, pos: Vec2) {
    let Some(start) = state.interaction.edge_preview.map(|p| p.start) else {
        return;
    };
    let pivot = preview_pivot(state, start, pos);
    if let Some(preview) = state.interaction.edge_preview.as_mut() {
        preview.end = pos;
        preview.pivot = pivot;
    }
}

/// Schließt die Kante am Knoten unter `pos` ab.
///
/// Selbstschleifen sind nur an Knoten erlaubt, die sie zulassen; Schnittstellen
/// nie. Quelle und Vorschau werden in jedem Fall verworfen.
pub fn finish_edge_at(state: &mut AppState, pos: Vec2) -> Option<u64> {
    let pending = state.interaction.pending_edge.take()?;
    state.interaction.edge_preview = None;

    let Some(ElementRef::Node(target)) = state.diagram.element_at(pos) else {
        log::debug!("Kein Ziel-Knoten unter {:?}, Kante verworfen", pos);
        return None;
    };
    let target_type = state.diagram.node(target)?.node_type;
    let self_loop = target == pending.source;

    if self_loop && !target_type.allows_self_loop() {
        log::debug!("Selbstschleife an {:?}-Knoten {} abgelehnt", target_type, target);
        return None;
    }
    if self_loop && pending.kind == EdgeType::Interface {
        log::debug!("Schnittstelle als Selbstschleife abgelehnt");
        return None;
    }

    let label = tool_catalog::edge_profile(pending.kind).default_label;
    let id = state
        .diagram_mut()
        .add_edge(pending.kind, label, pending.source, target)?;
    log::info!(
        "Kante {} ({:?}) angelegt: {} -> {}",
        id,
        pending.kind,
        pending.source,
        target
    );
    Some(id)
}

fn preview_pivot(state: &AppState, start: Vec2, end: Vec2) -> Vec2 {
    third_point_with_ratio(start, end, state.diagram.metrics().curve_offset_ratio)
}
