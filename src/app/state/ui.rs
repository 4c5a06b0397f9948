use crate::app::view::ContextMenuSpec;
use crate::shared::options::SURFACE_SIZE_DEFAULT;
use std::path::PathBuf;

/// UI-bezogener Sitzungszustand
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Pfad der aktuellen Datei (für Speichern ohne Dialog)
    pub current_file_path: Option<PathBuf>,
    /// Zuletzt geöffnete Datei (Vorschlag im Öffnen-Dialog)
    pub last_open_path: Option<PathBuf>,
    /// Aktuelle Größe der Zeichenfläche [Breite, Höhe]
    pub surface_size: [f32; 2],
    /// Aktuell angezeigtes Kontextmenü
    pub context_menu: Option<ContextMenuSpec>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            current_file_path: None,
            last_open_path: None,
            surface_size: SURFACE_SIZE_DEFAULT,
            context_menu: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
