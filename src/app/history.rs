use crate::core::Diagram;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Diagramm-Klon findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Diagramm (Arc-Klon für O(1)-Snapshot)
    pub diagram: Arc<Diagram>,
    /// Liste der Text-Knoten zum Zeitpunkt des Snapshots
    pub text_elements: Vec<u64>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            diagram: state.diagram.clone(),
            text_elements: state.text_elements.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.diagram = self.diagram;
        state.text_elements = self.text_elements;
    }
}

/// Linearer Undo-Stapel ohne Redo.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(256)),
            max_depth,
        }
    }

    /// Legt einen vorbereiteten Snapshot ab; bei voller Tiefe fällt der älteste weg.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Anzahl gespeicherter Undo-Schritte.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Entnimmt den jüngsten Snapshot (Aufrufer wendet ihn an).
    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo_stack.pop()
    }

    /// Verwirft alle Undo-Schritte (neues oder geladenes Diagramm).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }
}
