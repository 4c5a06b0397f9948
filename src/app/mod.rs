//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Diagramm, Modus, Selektion, Zeiger).
pub mod state;
pub mod tool_catalog;
pub mod use_cases;
pub mod view;

pub use command_log::{CommandLog, CommandLogEntry};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerButton};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorMode, SelectionState, UiState};
pub use view::{ContextMenuSpec, EditorView, ExportKind, NullView, PathPurpose};
