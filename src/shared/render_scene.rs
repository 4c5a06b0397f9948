//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der (externe) Renderer sie konsumiert.

use crate::core::{Diagram, ElementRef};
use glam::Vec2;
use std::sync::Arc;

/// Strichart der Gummiband-Vorschau beim Anlegen einer Kante
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewStyle {
    /// Operationen (eigener Strich)
    Operation,
    /// Alle übrigen Kantenarten
    Default,
}

/// Vorschau-Linie einer noch nicht angelegten Kante.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePreview {
    /// Mittelpunkt des Quell-Knotens
    pub start: Vec2,
    /// Aktuelle Zeigerposition
    pub end: Vec2,
    /// Kontrollpunkt der Vorschau-Kurve
    pub pivot: Vec2,
    pub style: PreviewStyle,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Das aktuelle Diagramm (Arc-Klon, O(1))
    pub diagram: Arc<Diagram>,
    /// Aktuell angeklicktes Element (für Hervorhebung und Handles)
    pub selected: Option<ElementRef>,
    /// Gummiband-Vorschau während des Kanten-Anlegens
    pub edge_preview: Option<EdgePreview>,
    /// Größe der Zeichenfläche [Breite, Höhe]
    pub surface_size: [f32; 2],
}

impl RenderScene {
    /// Gibt zurück, ob das Diagramm Elemente enthält.
    pub fn has_content(&self) -> bool {
        self.diagram.node_count() > 0
    }
}
