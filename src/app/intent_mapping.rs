//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::PointerButton;
use super::state::EditorMode;
use super::{AppCommand, AppIntent, AppState};
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            pos,
            button,
            timestamp_ms,
        } => map_pointer_pressed(state, pos, button, timestamp_ms),
        AppIntent::PointerDragged { pos } => {
            let mut commands = Vec::with_capacity(3);
            if state.mode == EditorMode::Selecting && state.selection.clicked.is_some() {
                commands.push(AppCommand::DragSelectionTo { pos });
            }
            if state.interaction.pending_edge.is_some() {
                commands.push(AppCommand::UpdateEdgePreview { pos });
            }
            commands.push(AppCommand::RequestRepaint);
            commands
        }
        AppIntent::PointerReleased { pos } => {
            let mut commands = Vec::with_capacity(3);
            if state.interaction.pending_edge.is_some() {
                commands.push(AppCommand::FinishEdgeAt { pos });
            }
            commands.push(AppCommand::EndDrag);
            commands.push(AppCommand::RequestRepaint);
            commands
        }
        AppIntent::ModeSelected { mode } => {
            vec![AppCommand::SetMode { mode }, AppCommand::CompleteCommand]
        }
        AppIntent::CancelRequested => vec![
            AppCommand::CancelPendingEdge,
            AppCommand::ResetToSelecting,
            AppCommand::RequestRepaint,
        ],
        AppIntent::NewFileRequested => transient(AppCommand::NewFile),
        AppIntent::OpenFileRequested => transient(AppCommand::OpenFile),
        AppIntent::SaveRequested => transient(AppCommand::SaveFile),
        AppIntent::ExportRequested { kind } => transient(AppCommand::Export { kind }),
        AppIntent::DeleteSelectedRequested => transient(AppCommand::DeleteSelected),
        AppIntent::EditSelectedRequested => transient(AppCommand::EditSelected),
        AppIntent::EditFunctionsRequested => transient(AppCommand::EditFunctions),
        AppIntent::UndoRequested => transient(AppCommand::Undo),
        AppIntent::SurfaceResized { size } => vec![AppCommand::SetSurfaceSize { size }],
    }
}

/// Einmalige Menü-Aktion: danach immer zurück in den Selektionsmodus.
fn transient(command: AppCommand) -> Vec<AppCommand> {
    vec![
        command,
        AppCommand::ResetToSelecting,
        AppCommand::CompleteCommand,
    ]
}

fn map_pointer_pressed(
    state: &AppState,
    pos: Vec2,
    button: PointerButton,
    timestamp_ms: u64,
) -> Vec<AppCommand> {
    let mut commands = vec![
        AppCommand::HideContextMenu,
        AppCommand::RecordPointer { pos },
    ];

    let primary = button == PointerButton::Primary;
    match state.mode {
        EditorMode::Selecting => commands.push(AppCommand::SelectAt { pos, timestamp_ms }),
        EditorMode::Deleting => commands.push(AppCommand::DeleteAt { pos }),
        // Anlegen nur mit der Primärtaste
        EditorMode::AddingNode(kind) if primary => {
            commands.push(AppCommand::AddNodeAt { kind, pos })
        }
        EditorMode::AddingEdge(kind) if primary => {
            commands.push(AppCommand::BeginEdgeAt { kind, pos })
        }
        EditorMode::AddingAction if primary => commands.push(AppCommand::AddActionAt { pos }),
        _ => {}
    }

    if button == PointerButton::Secondary {
        commands.push(AppCommand::ResetToSelecting);
        commands.push(AppCommand::ShowContextMenuAt { pos });
    }

    commands.push(AppCommand::RequestRepaint);
    commands
}
