//! Geometrie-Hilfen für Kurven, Handles und Hitboxen.
//!
//! Reine Funktionen ohne Zustand. Die Maße der Elemente (Zustandsradius,
//! Box-Größe, Toleranzen) stecken in [`DiagramMetrics`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Anteil der Segmentlänge für den senkrechten Versatz des Kontrollpunkts.
pub const CURVE_OFFSET_RATIO: f32 = 0.2;
/// Anzahl der Teilstücke, mit denen eine Kurve für Hit-Test und Rendering abgetastet wird.
pub const CURVE_SEGMENTS: usize = 24;

/// Maße, die Hit-Test und Kurvengeometrie des Diagramms bestimmen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramMetrics {
    /// Radius eines Zustands-Kreises
    pub state_radius: f32,
    /// Standardgröße einer Box (TAD-Nodes, Mindestgröße für Text und Aktionen)
    pub box_size: Vec2,
    /// Halbe Strichbreite, innerhalb der ein Klick eine Kante trifft
    pub edge_hit_tolerance: f32,
    /// Radius der Pivot-Handles
    pub handle_radius: f32,
    /// Abstand des Pivots vom Zentrum bei Selbstschleifen
    pub self_loop_size: f32,
    /// Versatz-Anteil für [`third_point_with_ratio`]
    pub curve_offset_ratio: f32,
    /// Geschätzte Zeichenbreite für Label-Boxen
    pub char_width: f32,
    /// Zeilenhöhe für Label-Boxen
    pub line_height: f32,
}

impl Default for DiagramMetrics {
    fn default() -> Self {
        Self {
            state_radius: 20.0,
            box_size: Vec2::new(90.0, 40.0),
            edge_hit_tolerance: 6.0,
            handle_radius: 6.0,
            self_loop_size: 40.0,
            curve_offset_ratio: CURVE_OFFSET_RATIO,
            char_width: 7.0,
            line_height: 14.0,
        }
    }
}

impl DiagramMetrics {
    /// Größe der Box um einen (mehrzeiligen) Text, ohne Mindestgröße.
    pub fn text_extent(&self, text: &str) -> Vec2 {
        let lines = text.lines().count().max(1);
        let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        Vec2::new(
            widest as f32 * self.char_width + self.char_width,
            lines as f32 * self.line_height,
        )
    }

    /// Hitbox eines Labels: Textgröße, mindestens so groß wie ein Handle.
    pub fn label_rect(&self, anchor: Vec2, text: &str) -> Rect {
        let min = Vec2::splat(self.handle_radius * 2.0);
        Rect::from_center_size(anchor, self.text_extent(text).max(min))
    }
}

/// Achsenparalleles Rechteck (min/max-Ecken).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rechteck mit gegebenem Mittelpunkt und Gesamtgröße.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Prüft, ob der Punkt im Rechteck liegt (Ränder inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Standard-Kontrollpunkt einer Kurve von `a` nach `b` mit [`CURVE_OFFSET_RATIO`].
pub fn third_point(a: Vec2, b: Vec2) -> Vec2 {
    third_point_with_ratio(a, b, CURVE_OFFSET_RATIO)
}

/// Kontrollpunkt auf der Mittelsenkrechten von a→b.
///
/// Der Versatz beträgt `ratio * |b - a|` zur linken Seite der Richtung a→b.
/// Vertauschte Endpunkte spiegeln den Punkt an der Strecke; für `a == b`
/// ergibt sich der Mittelpunkt.
pub fn third_point_with_ratio(a: Vec2, b: Vec2, ratio: f32) -> Vec2 {
    let midpoint = (a + b) * 0.5;
    // perp() hat dieselbe Länge wie delta, daher kein Normalisieren
    midpoint + (b - a).perp() * ratio
}

/// Punkt auf der quadratischen Bézierkurve p0 → control → p1 bei Parameter `t`.
pub fn quadratic_point(p0: Vec2, control: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + control * (2.0 * u * t) + p1 * (t * t)
}

/// Tastet eine quadratische Bézierkurve in `segments` Teilstücke ab.
pub fn sample_quadratic(p0: Vec2, control: Vec2, p1: Vec2, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| quadratic_point(p0, control, p1, i as f32 / segments as f32))
        .collect()
}

/// Tastet eine Selbstschleife ab: Kreis durch `center` und `pivot`.
pub fn sample_loop(center: Vec2, pivot: Vec2, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(3);
    let loop_center = (center + pivot) * 0.5;
    let radius = center.distance(pivot) * 0.5;
    let start = center - loop_center;
    let start_angle = start.y.atan2(start.x);

    (0..=segments)
        .map(|i| {
            let angle = start_angle + std::f32::consts::TAU * i as f32 / segments as f32;
            loop_center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Abstand eines Punkts zur Strecke a–b.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Kleinster Abstand eines Punkts zu einem Polygonzug (`INFINITY` bei leerem Zug).
pub fn distance_to_polyline(point: Vec2, path: &[Vec2]) -> f32 {
    match path {
        [] => f32::INFINITY,
        [single] => point.distance(*single),
        _ => path
            .windows(2)
            .map(|w| distance_to_segment(point, w[0], w[1]))
            .fold(f32::INFINITY, f32::min),
    }
}
