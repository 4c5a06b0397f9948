//! Use-Case: Klick im Selektionsmodus.
//!
//! Ein Klick kann in einem Schritt selektieren und ein Handle greifen.
//! Liegt der Klick außerhalb des angeklickten Elements, wird die Selektion
//! aufgehoben und derselbe Klick genau einmal erneut ausgewertet.

use crate::app::state::{DragHandle, LastClick};
use crate::app::use_cases::editing::edit_element;
use crate::app::view::EditorView;
use crate::app::AppState;
use crate::core::ElementRef;
use glam::Vec2;

/// Ergebnis einer Auswertung des Klicks
enum PressOutcome {
    Done,
    /// Selektion aufgehoben, Klick erneut auswerten
    Redispatch,
}

/// Führt das Selektions-Protokoll für einen Klick an `pos` aus.
pub fn select_at(state: &mut AppState, view: &mut dyn EditorView, pos: Vec2, timestamp_ms: u64) {
    state.interaction.press_snapshot_taken = false;
    // Höchstens eine erneute Auswertung pro Klick
    for _ in 0..2 {
        match evaluate_press(state, view, pos, timestamp_ms) {
            PressOutcome::Done => return,
            PressOutcome::Redispatch => {
                log::debug!("Klick außerhalb der Selektion, werte erneut aus: {:?}", pos);
            }
        }
    }
}

fn evaluate_press(
    state: &mut AppState,
    view: &mut dyn EditorView,
    pos: Vec2,
    timestamp_ms: u64,
) -> PressOutcome {
    let selected = match state.selection.clicked {
        Some(element) if state.diagram.contains_element(element) => element,
        _ => {
            state.selection.clear();
            let Some(hit) = state.diagram.element_at(pos) else {
                return PressOutcome::Done;
            };
            state.selection.select(hit);
            snapshot_press(state);
            log::debug!("Element selektiert: {:?}", hit);
            hit
        }
    };

    match selected {
        ElementRef::Edge(id) if state.diagram.edge_pivot_contains(id, pos) => {
            state.interaction.handle = DragHandle::EdgePivot;
            snapshot_press(state);
            return PressOutcome::Done;
        }
        ElementRef::Edge(id) if state.diagram.edge_label_contains(id, pos) => {
            // Kein früher Abbruch: Doppelklick auf das Label benennt um
            state.interaction.handle = DragHandle::EdgeLabel;
            snapshot_press(state);
        }
        ElementRef::Action(id) if state.diagram.action_pivot_contains(id, pos) => {
            state.interaction.handle = DragHandle::ActionPivot;
            snapshot_press(state);
            return PressOutcome::Done;
        }
        _ => {}
    }

    if !state.diagram.element_contains(selected, pos) {
        super::clear_selection(state);
        return PressOutcome::Redispatch;
    }

    let threshold = state.options.double_click_ms;
    if state
        .selection
        .is_double_click(selected, timestamp_ms, threshold)
    {
        state.selection.last_click = None;
        state.interaction.handle = DragHandle::None;
        log::debug!("Doppelklick auf {:?}", selected);
        edit_element(state, view, selected);
    } else {
        state.selection.last_click = Some(LastClick {
            element: selected,
            timestamp_ms,
        });
    }
    PressOutcome::Done
}

fn snapshot_press(state: &mut AppState) {
    state.record_undo_snapshot();
    state.interaction.press_snapshot_taken = true;
}
