//! Handler für Datei-Operationen (Neu, Öffnen, Speichern, Export).

use crate::app::use_cases;
use crate::app::view::{EditorView, ExportKind};
use crate::app::AppState;

pub fn new_file(state: &mut AppState) {
    use_cases::file_io::new_file(state);
}

/// Lädt ein Diagramm aus einer vom Benutzer gewählten Datei.
pub fn open(state: &mut AppState, view: &mut dyn EditorView) {
    use_cases::file_io::open_file(state, view);
}

/// Speichert unter dem aktuellen Pfad oder fragt nach einem.
pub fn save(state: &mut AppState, view: &mut dyn EditorView) {
    use_cases::file_io::save_file(state, view);
}

pub fn export(state: &mut AppState, view: &mut dyn EditorView, kind: ExportKind) {
    use_cases::file_io::export(state, view, kind);
}
