//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::view::{EditorView, ExportKind, PathPurpose};
use crate::app::AppState;
use crate::core::Diagram;
use crate::shared::DIAGRAM_FILE_EXTENSION;
use std::path::{Path, PathBuf};

/// Ersetzt das Diagramm durch ein leeres.
pub fn new_file(state: &mut AppState) {
    let metrics = state.options.metrics();
    state.replace_diagram(Diagram::new(metrics));
    state.ui.current_file_path = None;
    log::info!("Neues Diagramm angelegt");
}

/// Fragt nach einer Datei und lädt sie.
///
/// Fehler werden geloggt und dem Benutzer gemeldet; das bisherige Diagramm
/// bleibt dann unverändert.
pub fn open_file(state: &mut AppState, view: &mut dyn EditorView) {
    let Some(path) = view.choose_path(PathPurpose::Open, state.ui.last_open_path.as_deref())
    else {
        log::debug!("Öffnen abgebrochen");
        return;
    };

    match Diagram::load_from_path(&path, state.options.metrics()) {
        Ok(diagram) => {
            state.replace_diagram(diagram);
            state.ui.current_file_path = Some(path.clone());
        }
        Err(e) => {
            log::warn!("Laden fehlgeschlagen: {:#}", e);
            view.notify("Error loading file.");
        }
    }
    state.ui.last_open_path = Some(path);
}

/// Speichert unter dem bekannten Pfad oder fragt nach einem neuen.
pub fn save_file(state: &mut AppState, view: &mut dyn EditorView) {
    let path = match state.ui.current_file_path.clone() {
        Some(path) => path,
        None => {
            let Some(chosen) = view.choose_path(PathPurpose::Save, None) else {
                log::debug!("Speichern abgebrochen");
                return;
            };
            with_diagram_extension(chosen)
        }
    };

    match state.diagram.save_to_path(&path) {
        Ok(()) => state.ui.current_file_path = Some(path),
        Err(e) => {
            log::warn!("Speichern fehlgeschlagen: {:#}", e);
            view.notify("Error saving file.");
        }
    }
}

/// Reicht das Diagramm samt Text-Elementen an den Export der View weiter.
pub fn export(state: &mut AppState, view: &mut dyn EditorView, kind: ExportKind) {
    if let Err(e) = view.export(kind, &state.diagram, &state.text_elements) {
        log::warn!("Export {:?} fehlgeschlagen: {:#}", kind, e);
        view.notify("Error exporting file.");
    }
}

/// Hängt die Diagramm-Endung an, falls sie fehlt (eine andere Endung bleibt erhalten).
fn with_diagram_extension(path: PathBuf) -> PathBuf {
    if has_diagram_extension(&path) {
        return path;
    }
    let mut raw = path.into_os_string();
    raw.push(".");
    raw.push(DIAGRAM_FILE_EXTENSION);
    PathBuf::from(raw)
}

fn has_diagram_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DIAGRAM_FILE_EXTENSION))
}
