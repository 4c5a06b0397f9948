//! Nachschlagetabelle pro Elementart: Standard-Label, Kontextmenü-Text und Bearbeiten-Dialog.

use crate::core::{Diagram, EdgeType, ElementRef, NodeType};

/// Dialog, mit dem ein Element bearbeitet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPrompt {
    /// Einzeilige Eingabe; leere Eingabe nur, wenn `accepts_empty`
    SingleLine {
        message: &'static str,
        accepts_empty: bool,
    },
    /// Mehrzeilige Eingabe
    MultiLine {
        message: &'static str,
        title: &'static str,
    },
    /// Auswahl aus festen Optionen
    Choice {
        message: &'static str,
        title: &'static str,
        options: &'static [&'static str],
    },
}

/// Eintrag der Nachschlagetabelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementProfile {
    /// Label beim Anlegen
    pub default_label: &'static str,
    /// Beschriftung des Bearbeiten-Eintrags im Kontextmenü
    pub menu_label: &'static str,
    /// Kontextmenü zeigt „Funktionen bearbeiten"
    pub edit_functions: bool,
    pub prompt: EditPrompt,
}

/// Optionen des Operations-Dialogs (Index = Rückgabewert von `prompt_choice`).
pub const OPERATION_OPTIONS: &[&str] = &["Read/Write", "Write", "Read"];

const STATE: ElementProfile = ElementProfile {
    default_label: "",
    menu_label: "state number",
    edit_functions: false,
    prompt: EditPrompt::SingleLine {
        message: "Enter a number:",
        accepts_empty: false,
    },
};

const TAD: ElementProfile = ElementProfile {
    default_label: "TAD",
    menu_label: "TAD name",
    edit_functions: false,
    prompt: EditPrompt::SingleLine {
        message: "Enter a TAD name:",
        accepts_empty: false,
    },
};

const TEXT: ElementProfile = ElementProfile {
    default_label: "Text",
    menu_label: "text name",
    edit_functions: false,
    prompt: EditPrompt::MultiLine {
        message: "Enter the text you'd like:",
        title: "Floating text",
    },
};

const TRANSITION: ElementProfile = ElementProfile {
    default_label: "true",
    menu_label: "condition",
    edit_functions: false,
    prompt: EditPrompt::SingleLine {
        message: "Enter transition:",
        accepts_empty: true,
    },
};

const OPERATION: ElementProfile = ElementProfile {
    default_label: "operation",
    menu_label: "operation type",
    edit_functions: false,
    prompt: EditPrompt::Choice {
        message: "What would you like this operation to be?",
        title: "Operation settings",
        options: OPERATION_OPTIONS,
    },
};

// Schnittstellen werden ohne Label angelegt und später nummeriert
const INTERFACE: ElementProfile = ElementProfile {
    default_label: "",
    menu_label: "interface number",
    edit_functions: true,
    prompt: EditPrompt::SingleLine {
        message: "Enter interface:",
        accepts_empty: false,
    },
};

const INTERRUPT: ElementProfile = ElementProfile {
    default_label: "IRQ",
    menu_label: "interrupt request",
    edit_functions: false,
    prompt: EditPrompt::SingleLine {
        message: "Enter interrupt:",
        accepts_empty: false,
    },
};

/// Profil der Aktionen.
pub const ACTION: ElementProfile = ElementProfile {
    default_label: "// code",
    menu_label: "code",
    edit_functions: false,
    prompt: EditPrompt::MultiLine {
        message: "Enter the code to execute:",
        title: "Actions",
    },
};

pub fn node_profile(node_type: NodeType) -> &'static ElementProfile {
    match node_type {
        NodeType::State => &STATE,
        NodeType::Tad => &TAD,
        NodeType::Text => &TEXT,
    }
}

pub fn edge_profile(edge_type: EdgeType) -> &'static ElementProfile {
    match edge_type {
        EdgeType::Transition => &TRANSITION,
        EdgeType::Operation => &OPERATION,
        EdgeType::Interface => &INTERFACE,
        EdgeType::Interrupt => &INTERRUPT,
    }
}

/// Profil eines existierenden Elements (`None`, falls es nicht mehr existiert).
pub fn element_profile(diagram: &Diagram, element: ElementRef) -> Option<&'static ElementProfile> {
    match element {
        ElementRef::Node(id) => diagram.node(id).map(|n| node_profile(n.node_type)),
        ElementRef::Edge(id) => diagram.edge(id).map(|e| edge_profile(e.edge_type)),
        ElementRef::Action(id) => diagram.action(id).map(|_| &ACTION),
    }
}
