//! Verweis auf genau ein Diagramm-Element.

/// Typisierter Verweis auf einen Knoten, eine Kante oder eine Aktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Node(u64),
    Edge(u64),
    Action(u64),
}

impl ElementRef {
    /// ID des Elements (ohne Art).
    pub fn id(self) -> u64 {
        match self {
            ElementRef::Node(id) | ElementRef::Edge(id) | ElementRef::Action(id) => id,
        }
    }
}
