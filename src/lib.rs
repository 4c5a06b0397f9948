//! Microflow-Editor Library.
//! Interaktions-Kern (Zeiger-Events, Modi, Undo) als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorMode, EditorView, NullView,
    PointerButton, UiState,
};
pub use core::{Action, Diagram, Edge, EdgeType, ElementRef, Node, NodeType};
pub use shared::{EditorOptions, RenderScene};
