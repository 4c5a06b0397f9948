//! Use-Case: Elemente über Dialoge bearbeiten (Namen, Bedingungen, Operationsart, Code).
//!
//! Jede angenommene Änderung erzeugt vorher einen Snapshot; ein abgebrochener
//! Dialog ändert nichts.

use crate::app::state::EditorMode;
use crate::app::tool_catalog::{self, EditPrompt};
use crate::app::use_cases::selection::clear_selection;
use crate::app::view::EditorView;
use crate::app::AppState;
use crate::core::{EdgeType, ElementRef, NodeType};

/// Bearbeitet das angeklickte Element.
pub fn edit_selected(state: &mut AppState, view: &mut dyn EditorView) {
    match state.selection.clicked {
        Some(element) => edit_element(state, view, element),
        None => log::debug!("Bearbeiten ohne Selektion"),
    }
}

/// Öffnet den passenden Dialog für `element` und übernimmt das Ergebnis.
pub fn edit_element(state: &mut AppState, view: &mut dyn EditorView, element: ElementRef) {
    let Some(profile) = tool_catalog::element_profile(&state.diagram, element) else {
        return;
    };

    match (element, profile.prompt) {
        (ElementRef::Node(id), EditPrompt::MultiLine { message, title }) => {
            let seed = state.diagram.display_name(id).unwrap_or_default();
            if let Some(text) = ask_for_text(view, message, title, &seed) {
                state.record_undo_snapshot();
                state.diagram_mut().set_node_name(id, text, false);
                log::info!("Text-Knoten {} bearbeitet", id);
            }
        }
        (
            ElementRef::Node(id),
            EditPrompt::SingleLine {
                message,
                accepts_empty,
            },
        ) => {
            let seed = state.diagram.display_name(id).unwrap_or_default();
            if let Some(name) = ask_for_string(view, message, &seed, accepts_empty) {
                state.record_undo_snapshot();
                let diagram = state.diagram_mut();
                diagram.set_node_name(id, name, true);
                if diagram.node(id).map(|n| n.node_type) == Some(NodeType::State) {
                    diagram.notify_state_renamed(id);
                }
                log::info!("Knoten {} umbenannt", id);
            }
        }
        (
            ElementRef::Edge(id),
            EditPrompt::SingleLine {
                message,
                accepts_empty,
            },
        ) => {
            let Some((edge_type, seed)) = state
                .diagram
                .edge(id)
                .map(|e| (e.edge_type, e.label.clone()))
            else {
                return;
            };
            if let Some(label) = ask_for_string(view, message, &seed, accepts_empty) {
                state.record_undo_snapshot();
                let diagram = state.diagram_mut();
                diagram.set_edge_label(id, label, true);
                if matches!(edge_type, EdgeType::Interface | EdgeType::Interrupt) {
                    diagram.notify_interface_renamed(id);
                }
                log::info!("Kante {} umbenannt", id);
            }
        }
        (
            ElementRef::Edge(id),
            EditPrompt::Choice {
                message,
                title,
                options,
            },
        ) => {
            let choice = view.prompt_choice(message, title, options);
            apply_operation_choice(state, id, choice);
        }
        (ElementRef::Action(id), EditPrompt::MultiLine { message, title }) => {
            let seed = state
                .diagram
                .action(id)
                .map(|a| a.code.clone())
                .unwrap_or_default();
            if let Some(code) = view.prompt_multi_line(message, title, &seed) {
                state.record_undo_snapshot();
                state.diagram_mut().set_action_code(id, code);
                log::info!("Code der Aktion {} bearbeitet", id);
            }
        }
        (element, prompt) => {
            log::warn!("Kein Dialog für {:?} mit {:?}", element, prompt);
        }
    }

    clear_selection(state);
    state.mode = EditorMode::Selecting;
}

/// Bearbeitet die Funktionsdefinitionen der angeklickten Schnittstelle.
pub fn edit_functions(state: &mut AppState, view: &mut dyn EditorView) {
    let Some(ElementRef::Edge(id)) = state.selection.clicked else {
        log::debug!("Funktionen bearbeiten: keine Kante selektiert");
        return;
    };
    let Some(seed) = state
        .diagram
        .edge(id)
        .filter(|e| e.edge_type == EdgeType::Interface)
        .map(|e| e.functions.clone())
    else {
        log::debug!("Funktionen bearbeiten: Kante {} ist keine Schnittstelle", id);
        return;
    };

    if let Some(functions) = view.edit_functions(&seed) {
        state.record_undo_snapshot();
        if let Some(edge) = state.diagram_mut().edge_mut(id) {
            edge.functions = functions;
        }
        log::info!("Funktionen der Schnittstelle {} bearbeitet", id);
    }
}

/// Einzeilige Abfrage; leere Eingabe wird erneut abgefragt, außer sie ist erlaubt.
fn ask_for_string(
    view: &mut dyn EditorView,
    message: &str,
    seed: &str,
    accepts_empty: bool,
) -> Option<String> {
    loop {
        let input = view.prompt_single_line(message, seed)?;
        if !input.trim().is_empty() {
            return Some(input);
        }
        if accepts_empty {
            return Some(String::new());
        }
        log::debug!("Leere Eingabe abgelehnt, frage erneut");
    }
}

/// Mehrzeilige Abfrage für Text-Knoten; ein Text darf nicht leer sein.
fn ask_for_text(
    view: &mut dyn EditorView,
    message: &str,
    title: &str,
    seed: &str,
) -> Option<String> {
    loop {
        let input = view.prompt_multi_line(message, title, seed)?;
        if !input.trim().is_empty() {
            return Some(input);
        }
        log::debug!("Leerer Text abgelehnt, frage erneut");
    }
}

/// Index 0: lesen und schreiben, 1: nur schreiben, 2: nur lesen.
fn apply_operation_choice(state: &mut AppState, edge_id: u64, choice: Option<usize>) {
    let Some(choice @ 0..=2) = choice else {
        log::debug!("Operationsdialog abgebrochen");
        return;
    };

    state.record_undo_snapshot();
    let Some(edge) = state.diagram_mut().edge_mut(edge_id) else {
        return;
    };
    match choice {
        0 => edge.bidirectional = true,
        1 => edge.set_as_write(),
        _ => edge.set_as_read(),
    }
    log::info!(
        "Operation {}: {}",
        edge_id,
        tool_catalog::OPERATION_OPTIONS[choice]
    );
}
