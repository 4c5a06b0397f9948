//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::view::EditorView;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Die Commands eines Intents laufen vollständig und in Reihenfolge durch,
    /// bevor der nächste Intent angenommen wird.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        view: &mut dyn EditorView,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, view, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        view: &mut dyn EditorView,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command, state.mode);
        use super::handlers;

        match command {
            // === Zeiger & Selektion ===
            AppCommand::HideContextMenu => handlers::selection::hide_context_menu(state, view),
            AppCommand::RecordPointer { pos } => handlers::selection::record_pointer(state, pos),
            AppCommand::SelectAt { pos, timestamp_ms } => {
                handlers::selection::select_at(state, view, pos, timestamp_ms)
            }
            AppCommand::ShowContextMenuAt { pos } => {
                handlers::selection::show_context_menu(state, view, pos)
            }
            AppCommand::DragSelectionTo { pos } => handlers::selection::drag_to(state, pos),
            AppCommand::EndDrag => handlers::selection::end_drag(state),
            AppCommand::RequestRepaint => handlers::selection::request_repaint(view),

            // === Editing ===
            AppCommand::DeleteAt { pos } => handlers::editing::delete_at(state, pos),
            AppCommand::AddNodeAt { kind, pos } => {
                handlers::editing::add_node(state, view, kind, pos)
            }
            AppCommand::BeginEdgeAt { kind, pos } => handlers::editing::begin_edge(state, kind, pos),
            AppCommand::UpdateEdgePreview { pos } => handlers::editing::update_preview(state, pos),
            AppCommand::FinishEdgeAt { pos } => handlers::editing::finish_edge(state, pos),
            AppCommand::AddActionAt { pos } => handlers::editing::add_action(state, pos),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::EditSelected => handlers::editing::edit_selected(state, view),
            AppCommand::EditFunctions => handlers::editing::edit_functions(state, view),

            // === Modus ===
            AppCommand::SetMode { mode } => handlers::mode::set_mode(state, view, mode),
            AppCommand::ResetToSelecting => handlers::mode::reset_to_selecting(state, view),
            AppCommand::CancelPendingEdge => handlers::mode::cancel_pending_edge(state),
            AppCommand::CompleteCommand => handlers::mode::complete_command(state, view),
            AppCommand::SetSurfaceSize { size } => handlers::mode::set_surface_size(state, size),

            // === Datei-I/O ===
            AppCommand::NewFile => handlers::file_io::new_file(state),
            AppCommand::OpenFile => handlers::file_io::open(state, view),
            AppCommand::SaveFile => handlers::file_io::save(state, view),
            AppCommand::Export { kind } => handlers::file_io::export(state, view, kind),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
