//! Gerichtete Kanten zwischen zwei Knoten inklusive Kurvengeometrie.

use super::geometry::{
    distance_to_polyline, quadratic_point, sample_loop, sample_quadratic,
    third_point_with_ratio, DiagramMetrics, CURVE_SEGMENTS,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Art einer Kante
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeType {
    /// Übergang zwischen Zuständen mit Bedingung
    Transition,
    /// Lese-/Schreiboperation auf einem TAD
    Operation,
    /// Schnittstelle zu einer anderen Komponente (nie Selbstschleife)
    Interface,
    /// Interrupt-Anforderung
    Interrupt,
}

impl EdgeType {
    /// Kleingeschriebener Name für Prompts.
    pub fn display_name(self) -> &'static str {
        match self {
            EdgeType::Transition => "transition",
            EdgeType::Operation => "operation",
            EdgeType::Interface => "interface",
            EdgeType::Interrupt => "interrupt",
        }
    }
}

/// Zugriffsrichtung einer nicht-bidirektionalen Operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperationAccess {
    /// Zustand liest aus dem TAD
    #[default]
    Read,
    /// Zustand schreibt in das TAD
    Write,
}

/// Eine Kante zwischen zwei Knoten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Eindeutige ID innerhalb des Diagramms
    pub id: u64,
    /// Art der Kante
    pub edge_type: EdgeType,
    /// Start-Knoten-ID
    pub from: u64,
    /// End-Knoten-ID (gleich `from` bei Selbstschleifen)
    pub to: u64,
    /// Kontrollpunkt der Kurve
    pub pivot: Vec2,
    /// Ankerpunkt des Labels
    pub label_point: Vec2,
    /// Label (Bedingung, Schnittstellennummer, …)
    pub label: String,
    /// Label wurde explizit vergeben
    pub held_name: bool,
    /// Nur Operationen: liest und schreibt
    pub bidirectional: bool,
    /// Nur Operationen: Richtung, falls nicht bidirektional
    pub access: OperationAccess,
    /// Nur Schnittstellen: Funktionsdefinitionen
    #[serde(default)]
    pub functions: String,
    /// Abgetastete Kurve (abgeleitet, nicht persistiert)
    #[serde(skip)]
    path: Vec<Vec2>,
}

impl Edge {
    /// Erstellt eine Kante mit Standard-Pivot und Label in der Kurvenmitte.
    pub fn new(
        id: u64,
        edge_type: EdgeType,
        label: impl Into<String>,
        (from, start): (u64, Vec2),
        (to, end): (u64, Vec2),
        metrics: &DiagramMetrics,
    ) -> Self {
        let pivot = if from == to {
            start - Vec2::new(0.0, metrics.self_loop_size)
        } else {
            third_point_with_ratio(start, end, metrics.curve_offset_ratio)
        };

        let mut edge = Self {
            id,
            edge_type,
            from,
            to,
            pivot,
            label_point: pivot,
            label: label.into(),
            held_name: false,
            bidirectional: false,
            access: OperationAccess::default(),
            functions: String::new(),
            path: Vec::new(),
        };
        edge.update(start, end);
        edge.label_point = edge.midpoint();
        edge
    }

    /// Gibt zurück, ob Start und Ende derselbe Knoten sind.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Prüft, ob die Kante einen Knoten berührt.
    pub fn touches(&self, node_id: u64) -> bool {
        self.from == node_id || self.to == node_id
    }

    /// Berechnet die Kurve nach Änderung der Endpunkte oder des Pivots neu.
    pub fn update(&mut self, start: Vec2, end: Vec2) {
        self.path = if self.is_self_loop() {
            sample_loop(start, self.pivot, CURVE_SEGMENTS)
        } else {
            sample_quadratic(start, self.pivot, end, CURVE_SEGMENTS)
        };
    }

    /// Setzt den Pivot und berechnet die Kurve neu.
    pub fn update_pivot(&mut self, pivot: Vec2, start: Vec2, end: Vec2) {
        self.pivot = pivot;
        self.update(start, end);
    }

    /// Abgetastete Kurve für Rendering.
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Punkt in der Mitte der Kurve (Anker für Aktionen).
    pub fn midpoint(&self) -> Vec2 {
        match self.path.as_slice() {
            [] => self.pivot,
            [first, .., last] if !self.is_self_loop() => {
                quadratic_point(*first, self.pivot, *last, 0.5)
            }
            path => path[path.len() / 2],
        }
    }

    /// Trifft der Punkt den (verbreiterten) Strich oder das Label?
    pub fn contains(&self, point: Vec2, metrics: &DiagramMetrics) -> bool {
        distance_to_polyline(point, &self.path) <= metrics.edge_hit_tolerance
            || self.label_contains(point, metrics)
    }

    /// Trifft der Punkt die Label-Box?
    pub fn label_contains(&self, point: Vec2, metrics: &DiagramMetrics) -> bool {
        metrics
            .label_rect(self.label_point, &self.label)
            .contains(point)
    }

    /// Trifft der Punkt das Pivot-Handle?
    pub fn pivot_contains(&self, point: Vec2, metrics: &DiagramMetrics) -> bool {
        self.pivot.distance(point) <= metrics.handle_radius
    }

    /// Operation als reinen Lesezugriff markieren.
    pub fn set_as_read(&mut self) {
        self.bidirectional = false;
        self.access = OperationAccess::Read;
    }

    /// Operation als reinen Schreibzugriff markieren.
    pub fn set_as_write(&mut self) {
        self.bidirectional = false;
        self.access = OperationAccess::Write;
    }
}
