//! Schnittstelle zur Darstellungsschicht (Cursor, Repaint, Dialoge, Kontextmenü).
//!
//! Der Controller ruft die Methoden synchron auf; Dialoge blockieren die
//! Verarbeitung des auslösenden Events, bis ein Ergebnis vorliegt.
//! `None` bedeutet immer „abgebrochen".

use super::state::EditorMode;
use crate::core::{Diagram, ElementRef};
use glam::Vec2;
use std::path::{Path, PathBuf};

/// Zweck einer Dateiauswahl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPurpose {
    Open,
    Save,
}

/// Exportziel, das vollständig von der View umgesetzt wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Rastergrafik der Zeichenfläche
    Png,
    /// Druckauftrag
    Print,
    /// Quellcode-Generierung
    SourceCode,
    /// Motor-Datei (nutzt die Text-Elemente als Konstanten)
    Motor,
    /// Wörterbuch der Bezeichner
    Dictionary,
}

/// Konfiguration des Kontextmenüs für das angeklickte Element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuSpec {
    /// Element, auf das sich das Menü bezieht
    pub element: ElementRef,
    /// Beschriftung des Bearbeiten-Eintrags
    pub edit_label: &'static str,
    /// Eintrag „Funktionen bearbeiten" anzeigen (nur Schnittstellen)
    pub show_edit_functions: bool,
}

/// Von der Darstellungsschicht bereitgestellte Operationen.
pub trait EditorView {
    /// Cursor passend zum Modus setzen.
    fn change_cursor(&mut self, mode: EditorMode);

    fn request_repaint(&mut self);

    fn show_context_menu(&mut self, pos: Vec2, menu: &ContextMenuSpec);

    fn hide_context_menu(&mut self);

    /// Einzeiliger Eingabedialog, vorbelegt mit `seed`.
    fn prompt_single_line(&mut self, message: &str, seed: &str) -> Option<String>;

    /// Mehrzeiliger Eingabedialog.
    fn prompt_multi_line(&mut self, message: &str, title: &str, seed: &str) -> Option<String>;

    /// Auswahl aus festen Optionen; liefert den Index der gewählten Option.
    fn prompt_choice(&mut self, message: &str, title: &str, options: &[&str]) -> Option<usize>;

    /// Vergrößert die Zeichenfläche und stößt ein neues Layout an.
    fn grow_drawing_surface(&mut self, dx: f32, dy: f32);

    /// Dateiauswahl, optional mit vorgeschlagenem Pfad.
    fn choose_path(&mut self, purpose: PathPurpose, suggested: Option<&Path>) -> Option<PathBuf>;

    /// Einmalige Meldung an den Benutzer.
    fn notify(&mut self, message: &str);

    /// Editor für die Funktionsdefinitionen einer Schnittstelle.
    fn edit_functions(&mut self, seed: &str) -> Option<String>;

    /// Führt einen Export aus.
    fn export(
        &mut self,
        kind: ExportKind,
        diagram: &Diagram,
        text_elements: &[u64],
    ) -> anyhow::Result<()>;
}

/// View ohne Darstellung: alle Dialoge gelten als abgebrochen.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl EditorView for NullView {
    fn change_cursor(&mut self, _mode: EditorMode) {}

    fn request_repaint(&mut self) {}

    fn show_context_menu(&mut self, _pos: Vec2, _menu: &ContextMenuSpec) {}

    fn hide_context_menu(&mut self) {}

    fn prompt_single_line(&mut self, _message: &str, _seed: &str) -> Option<String> {
        None
    }

    fn prompt_multi_line(&mut self, _message: &str, _title: &str, _seed: &str) -> Option<String> {
        None
    }

    fn prompt_choice(&mut self, _message: &str, _title: &str, _options: &[&str]) -> Option<usize> {
        None
    }

    fn grow_drawing_surface(&mut self, _dx: f32, _dy: f32) {}

    fn choose_path(&mut self, _purpose: PathPurpose, _suggested: Option<&Path>) -> Option<PathBuf> {
        None
    }

    fn notify(&mut self, message: &str) {
        log::info!("Meldung (ohne View): {}", message);
    }

    fn edit_functions(&mut self, _seed: &str) -> Option<String> {
        None
    }

    fn export(
        &mut self,
        kind: ExportKind,
        _diagram: &Diagram,
        _text_elements: &[u64],
    ) -> anyhow::Result<()> {
        anyhow::bail!("Export {:?} ohne View nicht möglich", kind)
    }
}
