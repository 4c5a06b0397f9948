//! Zentrale Konfiguration für den Microflow-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::DiagramMetrics;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Maximaler Abstand zweier Klicks auf dasselbe Element für einen Doppelklick (ms).
pub const DOUBLE_CLICK_MS: u64 = 200;
/// Schrittweite, um die die Zeichenfläche wächst, wenn ein Element außerhalb landet.
pub const SURFACE_GROW_STEP: f32 = 100.0;
/// Anfangsgröße der Zeichenfläche.
pub const SURFACE_SIZE_DEFAULT: [f32; 2] = [1200.0, 800.0];

// ── Undo ────────────────────────────────────────────────────────────

/// Maximale Anzahl gespeicherter Undo-Schritte.
pub const UNDO_MAX_DEPTH: usize = 100;

// ── Hit-Test & Geometrie ───────────────────────────────────────────

/// Halbe Strichbreite, innerhalb der ein Klick eine Kante trifft.
pub const EDGE_HIT_TOLERANCE: f32 = 6.0;
/// Radius der Pivot-Handles.
pub const HANDLE_RADIUS: f32 = 6.0;
/// Radius eines Zustands-Kreises.
pub const STATE_RADIUS: f32 = 20.0;
/// Standardgröße von TAD-Boxen [Breite, Höhe].
pub const BOX_SIZE: [f32; 2] = [90.0, 40.0];
/// Abstand des Pivots vom Zentrum bei Selbstschleifen.
pub const SELF_LOOP_SIZE: f32 = 40.0;

// ── Persistenz ──────────────────────────────────────────────────────

/// Dateiendung für gespeicherte Diagramme.
pub const DIAGRAM_FILE_EXTENSION: &str = "mcf";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `microflow_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Doppelklick-Schwelle in Millisekunden
    pub double_click_ms: u64,
    /// Wachstum der Zeichenfläche pro Überschreitung
    pub surface_grow_step: f32,

    // ── Undo ────────────────────────────────────────────────────
    /// Maximale Undo-Tiefe (älteste Einträge werden verworfen)
    #[serde(default = "default_undo_max_depth")]
    pub undo_max_depth: usize,

    // ── Geometrie ───────────────────────────────────────────────
    /// Toleranz für Treffer auf Kantenstrichen
    pub edge_hit_tolerance: f32,
    /// Radius der Pivot-Handles
    pub handle_radius: f32,
    /// Radius der Zustands-Kreise
    pub state_radius: f32,
    /// Größe der TAD-Boxen [Breite, Höhe]
    pub box_size: [f32; 2],
    /// Pivot-Abstand bei Selbstschleifen
    pub self_loop_size: f32,
    /// Versatz-Anteil des Standard-Kontrollpunkts
    #[serde(default = "default_curve_offset_ratio")]
    pub curve_offset_ratio: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            double_click_ms: DOUBLE_CLICK_MS,
            surface_grow_step: SURFACE_GROW_STEP,
            undo_max_depth: UNDO_MAX_DEPTH,
            edge_hit_tolerance: EDGE_HIT_TOLERANCE,
            handle_radius: HANDLE_RADIUS,
            state_radius: STATE_RADIUS,
            box_size: BOX_SIZE,
            self_loop_size: SELF_LOOP_SIZE,
            curve_offset_ratio: crate::core::geometry::CURVE_OFFSET_RATIO,
        }
    }
}

/// Serde-Default für `undo_max_depth` (ältere TOML-Dateien ohne Eintrag).
fn default_undo_max_depth() -> usize {
    UNDO_MAX_DEPTH
}

/// Serde-Default für `curve_offset_ratio`.
fn default_curve_offset_ratio() -> f32 {
    crate::core::geometry::CURVE_OFFSET_RATIO
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) if opts.is_valid() => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Ok(_) => {
                    log::warn!("Optionen außerhalb gültiger Bereiche, verwende Standardwerte");
                    Self::default()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Maße für Hit-Test und Kurvengeometrie des Diagramms.
    pub fn metrics(&self) -> DiagramMetrics {
        DiagramMetrics {
            state_radius: self.state_radius,
            box_size: Vec2::from(self.box_size),
            edge_hit_tolerance: self.edge_hit_tolerance,
            handle_radius: self.handle_radius,
            self_loop_size: self.self_loop_size,
            curve_offset_ratio: self.curve_offset_ratio,
            ..DiagramMetrics::default()
        }
    }

    fn is_valid(&self) -> bool {
        self.undo_max_depth > 0
            && self.surface_grow_step > 0.0
            && self.edge_hit_tolerance >= 0.0
            && self.handle_radius > 0.0
            && self.state_radius > 0.0
            && self.box_size.iter().all(|v| *v > 0.0)
            && self.curve_offset_ratio.is_finite()
    }
}
