use crate::core::EdgeType;
use crate::shared::EdgePreview;
use glam::Vec2;

/// Beim Drücken gewähltes Handle, das die folgenden Zieh-Events verschieben
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragHandle {
    /// Kein Handle: Knoten und Aktionen bewegen sich als Ganzes, Kanten gar nicht
    #[default]
    None,
    EdgeLabel,
    EdgePivot,
    ActionPivot,
}

/// Quell-Knoten einer Kante, die gerade aufgezogen wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingEdge {
    pub source: u64,
    pub kind: EdgeType,
}

/// Flüchtiger Zustand zwischen Zeiger-Events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub handle: DragHandle,
    /// Letzte Zeigerposition (Basis für Zieh-Deltas)
    pub last_pointer: Option<Vec2>,
    pub pending_edge: Option<PendingEdge>,
    pub edge_preview: Option<EdgePreview>,
    /// Der aktuelle Klick hat bereits einen Undo-Snapshot erzeugt
    pub press_snapshot_taken: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft eine angefangene Kante samt Vorschau.
    pub fn cancel_pending_edge(&mut self) {
        self.pending_edge = None;
        self.edge_preview = None;
    }

    /// Setzt alle Handles und die angefangene Kante zurück.
    pub fn reset(&mut self) {
        self.handle = DragHandle::None;
        self.press_snapshot_taken = false;
        self.cancel_pending_edge();
    }
}
