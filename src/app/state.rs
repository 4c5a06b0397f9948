//! Application State: zentrale Datenhaltung.

mod interaction;
mod mode;
mod selection;
mod ui;

pub use interaction::{DragHandle, InteractionState, PendingEdge};
pub use mode::EditorMode;
pub use selection::{LastClick, SelectionState};
pub use ui::UiState;

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{Diagram, ElementRef};
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Diagramm (Arc für O(1)-Snapshots, Mutation über `diagram_mut`)
    pub diagram: Arc<Diagram>,
    /// IDs der Text-Knoten in Anlegereihenfolge (Konstanten für den Export)
    pub text_elements: Vec<u64>,
    /// Aktiver Modus
    pub mode: EditorMode,
    /// Selection-State
    pub selection: SelectionState,
    /// Flüchtiger Zeiger-Zustand (Handles, angefangene Kante)
    pub interaction: InteractionState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            diagram: Arc::new(Diagram::new(options.metrics())),
            text_elements: Vec::new(),
            mode: EditorMode::default(),
            selection: SelectionState::new(),
            interaction: InteractionState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.undo_max_depth),
            options,
        }
    }

    /// Veränderbarer Zugriff auf das Diagramm (CoW: klont nur, wenn ein Snapshot es teilt).
    pub fn diagram_mut(&mut self) -> &mut Diagram {
        Arc::make_mut(&mut self.diagram)
    }

    /// Prüft, ob das Element das aktuell angeklickte ist.
    pub fn is_selected(&self, element: ElementRef) -> bool {
        self.selection.clicked == Some(element)
    }

    pub fn node_count(&self) -> usize {
        self.diagram.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.diagram.edge_count()
    }

    pub fn action_count(&self) -> usize {
        self.diagram.action_count()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Ersetzt das Diagramm vollständig (Neu/Öffnen) und setzt den Sitzungszustand zurück.
    pub fn replace_diagram(&mut self, diagram: Diagram) {
        self.text_elements = diagram
            .nodes()
            .filter(|n| n.node_type == crate::core::NodeType::Text)
            .map(|n| n.id)
            .collect();
        self.diagram = Arc::new(diagram);
        self.history.clear();
        self.selection.clear();
        self.interaction.reset();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
