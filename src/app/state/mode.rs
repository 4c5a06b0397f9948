use crate::core::{EdgeType, NodeType};

/// Aktiver Editor-Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Standard: Elemente selektieren, ziehen, umbenennen
    #[default]
    Selecting,
    /// Klick löscht das getroffene Element
    Deleting,
    /// Klick legt einen Knoten der Art an
    AddingNode(NodeType),
    /// Drücken auf Quelle, Loslassen auf Ziel legt eine Kante an
    AddingEdge(EdgeType),
    /// Klick auf eine Kante hängt eine Aktion an
    AddingAction,
}
