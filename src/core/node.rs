//! Knoten des Diagramms: Zustände, TADs und freie Texte.

use super::geometry::{DiagramMetrics, Rect};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Art eines Knotens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Zustand der Ablaufsteuerung (Kreis, automatisch nummeriert)
    State,
    /// Abstrakter Datentyp, auf den Operationen lesen/schreiben
    Tad,
    /// Freier Text (Konstanten, Anmerkungen)
    Text,
}

impl NodeType {
    /// Nur Zustände dürfen Selbstschleifen tragen.
    pub fn allows_self_loop(self) -> bool {
        matches!(self, NodeType::State)
    }

    /// Kleingeschriebener Name für Prompts und Menüs.
    pub fn display_name(self) -> &'static str {
        match self {
            NodeType::State => "state",
            NodeType::Tad => "TAD",
            NodeType::Text => "text",
        }
    }
}

/// Ein Knoten im Diagramm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Eindeutige ID innerhalb des Diagramms
    pub id: u64,
    /// Art des Knotens
    pub node_type: NodeType,
    /// Mittelpunkt in Zeichenflächen-Koordinaten
    pub center: Vec2,
    /// Anzeigename; bei Zuständen ohne festen Namen die vergebene Nummer
    pub name: String,
    /// Name wurde explizit vergeben (sonst Standardname/Nummer)
    pub held_name: bool,
}

impl Node {
    /// Erstellt einen neuen Knoten ohne festgehaltenen Namen.
    pub fn new(id: u64, node_type: NodeType, name: impl Into<String>, center: Vec2) -> Self {
        Self {
            id,
            node_type,
            center,
            name: name.into(),
            held_name: false,
        }
    }

    /// Verschiebt den Mittelpunkt um ein Delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Prüft, ob ein Punkt innerhalb der sichtbaren Form liegt.
    pub fn contains(&self, point: Vec2, metrics: &DiagramMetrics) -> bool {
        match self.node_type {
            NodeType::State => self.center.distance(point) <= metrics.state_radius,
            NodeType::Tad => Rect::from_center_size(self.center, metrics.box_size).contains(point),
            NodeType::Text => {
                let size = metrics.text_extent(&self.name).max(Vec2::new(
                    metrics.char_width * 4.0,
                    metrics.line_height,
                ));
                Rect::from_center_size(self.center, size).contains(point)
            }
        }
    }
}
