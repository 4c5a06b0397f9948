//! Aktionen: Code-Blöcke, die an einer Kante hängen.

use super::geometry::{
    sample_quadratic, third_point_with_ratio, DiagramMetrics, Rect, CURVE_SEGMENTS,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein ausführbarer Code-Block an einer Kante
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Eindeutige ID innerhalb des Diagramms
    pub id: u64,
    /// Besitzende Kante
    pub edge_id: u64,
    /// Auszuführender Code
    pub code: String,
    /// Position der Code-Box
    pub start: Vec2,
    /// Kontrollpunkt der Verbindungslinie zur Kante
    pub pivot: Vec2,
    /// Verbindungslinie Box → Kante (abgeleitet, nicht persistiert)
    #[serde(skip)]
    path: Vec<Vec2>,
}

impl Action {
    /// Erstellt eine Aktion an `start`, verbunden mit dem Kantenanker `anchor`.
    pub fn new(
        id: u64,
        edge_id: u64,
        code: impl Into<String>,
        start: Vec2,
        anchor: Vec2,
        metrics: &DiagramMetrics,
    ) -> Self {
        let mut action = Self {
            id,
            edge_id,
            code: code.into(),
            start,
            pivot: third_point_with_ratio(start, anchor, metrics.curve_offset_ratio),
            path: Vec::new(),
        };
        action.update(anchor);
        action
    }

    /// Berechnet die Verbindungslinie zur Kante neu.
    pub fn update(&mut self, anchor: Vec2) {
        self.path = sample_quadratic(self.start, self.pivot, anchor, CURVE_SEGMENTS);
    }

    /// Abgetastete Verbindungslinie für Rendering.
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Hitbox der Code-Box.
    pub fn bounds(&self, metrics: &DiagramMetrics) -> Rect {
        let size = metrics.text_extent(&self.code).max(metrics.box_size);
        Rect::from_center_size(self.start, size)
    }

    /// Trifft der Punkt die Code-Box?
    pub fn contains(&self, point: Vec2, metrics: &DiagramMetrics) -> bool {
        self.bounds(metrics).contains(point)
    }

    /// Trifft der Punkt das Pivot-Handle?
    pub fn pivot_contains(&self, point: Vec2, metrics: &DiagramMetrics) -> bool {
        self.pivot.distance(point) <= metrics.handle_radius
    }
}
