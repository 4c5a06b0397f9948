use crate::app::state::EditorMode;
use crate::app::view::ExportKind;
use crate::core::{EdgeType, NodeType};
use glam::Vec2;

/// Mutierende Commands, die vom Controller ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Zeiger ===
    /// Kontextmenü schließen
    HideContextMenu,
    /// Zeigerposition als Basis für Zieh-Deltas merken
    RecordPointer { pos: Vec2 },
    /// Selektions-Protokoll für einen Klick
    SelectAt { pos: Vec2, timestamp_ms: u64 },
    /// Getroffenes Element löschen
    DeleteAt { pos: Vec2 },
    /// Knoten anlegen
    AddNodeAt { kind: NodeType, pos: Vec2 },
    /// Kante an einem Quell-Knoten beginnen
    BeginEdgeAt { kind: EdgeType, pos: Vec2 },
    /// Aktion an der getroffenen Kante anlegen
    AddActionAt { pos: Vec2 },
    /// Kontextmenü für das angeklickte Element anzeigen, falls getroffen
    ShowContextMenuAt { pos: Vec2 },
    /// Angeklicktes Element bzw. Handle ziehen
    DragSelectionTo { pos: Vec2 },
    /// Gummiband-Vorschau nachführen
    UpdateEdgePreview { pos: Vec2 },
    /// Kante am Ziel-Knoten abschließen
    FinishEdgeAt { pos: Vec2 },
    /// Alle Zieh-Handles lösen
    EndDrag,
    RequestRepaint,

    // === Modus ===
    SetMode { mode: EditorMode },
    /// Zurück in den Selektionsmodus
    ResetToSelecting,
    /// Angefangene Kante verwerfen
    CancelPendingEdge,
    /// Abschluss einer Menü-Aktion: Menü schließen, Selektion aufheben, neu zeichnen
    CompleteCommand,
    SetSurfaceSize { size: [f32; 2] },

    // === Bearbeiten ===
    DeleteSelected,
    EditSelected,
    EditFunctions,

    // === Datei-I/O ===
    NewFile,
    OpenFile,
    SaveFile,
    Export { kind: ExportKind },

    // === History ===
    Undo,
}
