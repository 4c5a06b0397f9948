use crate::app::state::EditorMode;
use crate::app::view::ExportKind;
use glam::Vec2;

/// Maustaste eines Zeiger-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeiger gedrückt (Zeitstempel in ms für die Doppelklick-Erkennung)
    PointerPressed {
        pos: Vec2,
        button: PointerButton,
        timestamp_ms: u64,
    },
    /// Zeiger mit gedrückter Taste bewegt
    PointerDragged { pos: Vec2 },
    /// Zeiger losgelassen
    PointerReleased { pos: Vec2 },
    /// Werkzeug/Modus in Toolbar oder Menü gewählt
    ModeSelected { mode: EditorMode },
    /// Globaler Abbruch (Escape)
    CancelRequested,
    /// Neues, leeres Diagramm
    NewFileRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Export über die View
    ExportRequested { kind: ExportKind },
    /// Angeklicktes Element löschen (Kontextmenü)
    DeleteSelectedRequested,
    /// Angeklicktes Element bearbeiten (Kontextmenü)
    EditSelectedRequested,
    /// Funktionen der angeklickten Schnittstelle bearbeiten
    EditFunctionsRequested,
    UndoRequested,
    /// Zeichenfläche hat eine neue Größe
    SurfaceResized { size: [f32; 2] },
}
