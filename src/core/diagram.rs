//! Das zentrale Diagramm mit Knoten, Kanten und Aktionen.
//!
//! Die Einfügereihenfolge der `IndexMap`s ist zugleich die Z-Reihenfolge:
//! später hinzugefügte Elemente liegen oben. Löschen verwendet daher
//! `shift_remove`, damit die Reihenfolge der übrigen Elemente erhalten bleibt.

use super::geometry::DiagramMetrics;
use super::{Action, Edge, EdgeType, ElementRef, Node, NodeType};
use anyhow::Context;
use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Vollständiger Diagramm-Inhalt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    nodes: IndexMap<u64, Node>,
    edges: IndexMap<u64, Edge>,
    actions: IndexMap<u64, Action>,
    next_id: u64,
    /// Zuletzt vergebene Zustandsnummer
    #[serde(default)]
    state_counter: u64,
    /// Maße für Hit-Test und Geometrie (Laufzeit-Konfiguration, nicht persistiert)
    #[serde(skip)]
    metrics: DiagramMetrics,
}

impl Diagram {
    /// Erstellt ein leeres Diagramm mit den gegebenen Maßen.
    pub fn new(metrics: DiagramMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    /// Aktuelle Maße.
    pub fn metrics(&self) -> &DiagramMetrics {
        &self.metrics
    }

    // ── Lesezugriff ─────────────────────────────────────────────────

    pub fn node(&self, id: u64) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn edge(&self, id: u64) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn action(&self, id: u64) -> Option<&Action> {
        self.actions.get(&id)
    }

    /// Knoten in Z-Reihenfolge (unten zuerst).
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &Node> {
        self.nodes.values()
    }

    /// Kanten in Z-Reihenfolge (unten zuerst).
    pub fn edges(&self) -> impl DoubleEndedIterator<Item = &Edge> {
        self.edges.values()
    }

    /// Aktionen in Z-Reihenfolge (unten zuerst).
    pub fn actions(&self) -> impl DoubleEndedIterator<Item = &Action> {
        self.actions.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Prüft, ob das referenzierte Element (noch) existiert.
    pub fn contains_element(&self, element: ElementRef) -> bool {
        match element {
            ElementRef::Node(id) => self.nodes.contains_key(&id),
            ElementRef::Edge(id) => self.edges.contains_key(&id),
            ElementRef::Action(id) => self.actions.contains_key(&id),
        }
    }

    /// Alle Kanten, die einen Knoten berühren.
    pub fn incident_edges(&self, node_id: u64) -> impl Iterator<Item = &Edge> {
        self.edges.values().filter(move |e| e.touches(node_id))
    }

    /// Anzuzeigender Name eines Knotens.
    ///
    /// Zustände tragen ab dem Anlegen eine feste Nummer, bis sie umbenannt
    /// werden; Löschen anderer Zustände ändert sie nicht.
    pub fn display_name(&self, node_id: u64) -> Option<String> {
        self.nodes.get(&node_id).map(|n| n.name.clone())
    }

    fn state_name_taken(&self, name: &str) -> bool {
        self.nodes
            .values()
            .any(|n| n.node_type == NodeType::State && n.name == name)
    }

    // ── Hit-Test ────────────────────────────────────────────────────

    /// Oberstes Element am Punkt.
    ///
    /// Priorität: Knoten vor Kanten vor Aktionen, innerhalb einer Art das
    /// zuletzt hinzugefügte zuerst. Kanten treffen über Strich, Label oder Pivot.
    pub fn element_at(&self, point: Vec2) -> Option<ElementRef> {
        let m = &self.metrics;
        if let Some(node) = self.nodes.values().rev().find(|n| n.contains(point, m)) {
            return Some(ElementRef::Node(node.id));
        }
        if let Some(edge) = self
            .edges
            .values()
            .rev()
            .find(|e| e.contains(point, m) || e.pivot_contains(point, m))
        {
            return Some(ElementRef::Edge(edge.id));
        }
        self.actions
            .values()
            .rev()
            .find(|a| a.contains(point, m))
            .map(|a| ElementRef::Action(a.id))
    }

    /// Prüft, ob der Punkt innerhalb des Elements liegt (Kanten: Strich oder Label).
    pub fn element_contains(&self, element: ElementRef, point: Vec2) -> bool {
        let m = &self.metrics;
        match element {
            ElementRef::Node(id) => self.nodes.get(&id).is_some_and(|n| n.contains(point, m)),
            ElementRef::Edge(id) => self.edges.get(&id).is_some_and(|e| e.contains(point, m)),
            ElementRef::Action(id) => self.actions.get(&id).is_some_and(|a| a.contains(point, m)),
        }
    }

    pub fn edge_label_contains(&self, edge_id: u64, point: Vec2) -> bool {
        self.edges
            .get(&edge_id)
            .is_some_and(|e| e.label_contains(point, &self.metrics))
    }

    pub fn edge_pivot_contains(&self, edge_id: u64, point: Vec2) -> bool {
        self.edges
            .get(&edge_id)
            .is_some_and(|e| e.pivot_contains(point, &self.metrics))
    }

    pub fn action_pivot_contains(&self, action_id: u64, point: Vec2) -> bool {
        self.actions
            .get(&action_id)
            .is_some_and(|a| a.pivot_contains(point, &self.metrics))
    }

    // ── Hinzufügen ──────────────────────────────────────────────────

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Nächste freie Zustandsnummer. Von Hand vergebene Nummern werden übersprungen.
    fn fresh_state_number(&mut self) -> String {
        loop {
            self.state_counter += 1;
            let candidate = self.state_counter.to_string();
            if !self.state_name_taken(&candidate) {
                return candidate;
            }
        }
    }

    /// Fügt einen Knoten hinzu und gibt seine ID zurück.
    ///
    /// Ein Zustand ohne Namen erhält die nächste freie Nummer.
    pub fn add_node(&mut self, node_type: NodeType, name: impl Into<String>, center: Vec2) -> u64 {
        let id = self.allocate_id();
        let mut name = name.into();
        if node_type == NodeType::State && name.is_empty() {
            name = self.fresh_state_number();
        }
        self.nodes.insert(id, Node::new(id, node_type, name, center));
        id
    }

    /// Fügt eine Kante hinzu.
    ///
    /// Gibt `None` zurück, wenn ein Endpunkt fehlt oder eine Schnittstelle
    /// als Selbstschleife angelegt werden soll.
    pub fn add_edge(
        &mut self,
        edge_type: EdgeType,
        label: impl Into<String>,
        from: u64,
        to: u64,
    ) -> Option<u64> {
        let start = self.nodes.get(&from)?.center;
        let end = self.nodes.get(&to)?.center;
        if from == to && edge_type == EdgeType::Interface {
            log::debug!("Schnittstelle als Selbstschleife an Knoten {} abgelehnt", from);
            return None;
        }

        let id = self.allocate_id();
        let edge = Edge::new(id, edge_type, label, (from, start), (to, end), &self.metrics);
        self.edges.insert(id, edge);
        Some(id)
    }

    /// Hängt eine Aktion an eine Kante. `None`, wenn die Kante fehlt.
    pub fn add_action(&mut self, edge_id: u64, code: impl Into<String>, start: Vec2) -> Option<u64> {
        let anchor = self.edges.get(&edge_id)?.midpoint();
        let id = self.allocate_id();
        let action = Action::new(id, edge_id, code, start, anchor, &self.metrics);
        self.actions.insert(id, action);
        Some(id)
    }

    // ── Löschen ─────────────────────────────────────────────────────

    /// Entfernt einen Knoten samt aller berührenden Kanten und deren Aktionen.
    pub fn delete_node(&mut self, node_id: u64) -> Option<Node> {
        let removed = self.nodes.shift_remove(&node_id)?;
        let edge_ids: Vec<u64> = self.incident_edges(node_id).map(|e| e.id).collect();
        for edge_id in edge_ids {
            self.delete_edge(edge_id);
        }
        Some(removed)
    }

    /// Entfernt eine Kante samt ihrer Aktionen.
    pub fn delete_edge(&mut self, edge_id: u64) -> Option<Edge> {
        let removed = self.edges.shift_remove(&edge_id)?;
        self.actions.retain(|_, a| a.edge_id != edge_id);
        Some(removed)
    }

    pub fn delete_action(&mut self, action_id: u64) -> Option<Action> {
        self.actions.shift_remove(&action_id)
    }

    /// Löscht ein beliebiges Element. Gibt `true` zurück, wenn es existierte.
    pub fn delete_element(&mut self, element: ElementRef) -> bool {
        match element {
            ElementRef::Node(id) => self.delete_node(id).is_some(),
            ElementRef::Edge(id) => self.delete_edge(id).is_some(),
            ElementRef::Action(id) => self.delete_action(id).is_some(),
        }
    }

    // ── Verschieben ─────────────────────────────────────────────────

    /// Verschiebt einen Knoten und berechnet alle berührenden Kanten neu.
    pub fn move_node(&mut self, node_id: u64, delta: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };
        node.translate(delta);

        let edge_ids: Vec<u64> = self.incident_edges(node_id).map(|e| e.id).collect();
        for edge_id in edge_ids {
            self.refresh_edge(edge_id);
        }
        true
    }

    /// Verschiebt den Label-Anker einer Kante.
    pub fn move_edge_label(&mut self, edge_id: u64, delta: Vec2) -> bool {
        let Some(edge) = self.edges.get_mut(&edge_id) else {
            return false;
        };
        edge.label_point += delta;
        true
    }

    /// Verschiebt den Pivot einer Kante und berechnet die Kurve neu.
    pub fn move_edge_pivot(&mut self, edge_id: u64, delta: Vec2) -> bool {
        let Some((start, end)) = self.edge_endpoints(edge_id) else {
            return false;
        };
        let Some(edge) = self.edges.get_mut(&edge_id) else {
            return false;
        };
        let pivot = edge.pivot + delta;
        edge.update_pivot(pivot, start, end);
        self.refresh_actions_of(edge_id);
        true
    }

    /// Verschiebt die Code-Box einer Aktion.
    pub fn move_action(&mut self, action_id: u64, delta: Vec2) -> bool {
        let Some(anchor) = self.action_anchor(action_id) else {
            return false;
        };
        let Some(action) = self.actions.get_mut(&action_id) else {
            return false;
        };
        action.start += delta;
        action.update(anchor);
        true
    }

    /// Setzt den Pivot einer Aktion auf eine absolute Position.
    pub fn set_action_pivot(&mut self, action_id: u64, pivot: Vec2) -> bool {
        let Some(anchor) = self.action_anchor(action_id) else {
            return false;
        };
        let Some(action) = self.actions.get_mut(&action_id) else {
            return false;
        };
        action.pivot = pivot;
        action.update(anchor);
        true
    }

    fn edge_endpoints(&self, edge_id: u64) -> Option<(Vec2, Vec2)> {
        let edge = self.edges.get(&edge_id)?;
        Some((
            self.nodes.get(&edge.from)?.center,
            self.nodes.get(&edge.to)?.center,
        ))
    }

    fn action_anchor(&self, action_id: u64) -> Option<Vec2> {
        let edge_id = self.actions.get(&action_id)?.edge_id;
        Some(self.edges.get(&edge_id)?.midpoint())
    }

    fn refresh_edge(&mut self, edge_id: u64) {
        if let Some((start, end)) = self.edge_endpoints(edge_id) {
            if let Some(edge) = self.edges.get_mut(&edge_id) {
                edge.update(start, end);
            }
            self.refresh_actions_of(edge_id);
        }
    }

    fn refresh_actions_of(&mut self, edge_id: u64) {
        let Some(anchor) = self.edges.get(&edge_id).map(Edge::midpoint) else {
            return;
        };
        for action in self.actions.values_mut().filter(|a| a.edge_id == edge_id) {
            action.update(anchor);
        }
    }

    /// Berechnet alle abgeleiteten Kurven neu (nach Laden oder Maßänderung).
    pub fn rebuild_geometry(&mut self) {
        let edge_ids: Vec<u64> = self.edges.keys().copied().collect();
        for edge_id in edge_ids {
            self.refresh_edge(edge_id);
        }
    }

    // ── Umbenennen ──────────────────────────────────────────────────

    /// Setzt den Namen eines Knotens.
    pub fn set_node_name(&mut self, node_id: u64, name: impl Into<String>, hold: bool) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };
        node.name = name.into();
        node.held_name |= hold;
        true
    }

    /// Setzt das Label einer Kante.
    pub fn set_edge_label(&mut self, edge_id: u64, label: impl Into<String>, hold: bool) -> bool {
        let Some(edge) = self.edges.get_mut(&edge_id) else {
            return false;
        };
        edge.label = label.into();
        edge.held_name |= hold;
        true
    }

    /// Zugriff auf eine Kante zur Änderung von Operationsrichtung oder Funktionen.
    pub fn edge_mut(&mut self, edge_id: u64) -> Option<&mut Edge> {
        self.edges.get_mut(&edge_id)
    }

    /// Setzt den Code einer Aktion.
    pub fn set_action_code(&mut self, action_id: u64, code: impl Into<String>) -> bool {
        let Some(action) = self.actions.get_mut(&action_id) else {
            return false;
        };
        action.code = code.into();
        true
    }

    /// Hält Zustandsbezeichner eindeutig, nachdem ein Zustand umbenannt wurde.
    ///
    /// Jeder andere Zustand mit demselben Namen, ob festgehalten oder
    /// nummeriert, erhält eine frische Nummer.
    pub fn notify_state_renamed(&mut self, node_id: u64) {
        let Some(name) = self
            .nodes
            .get(&node_id)
            .filter(|n| n.node_type == NodeType::State)
            .map(|n| n.name.clone())
        else {
            return;
        };

        let colliding: Vec<u64> = self
            .nodes
            .values()
            .filter(|n| n.id != node_id && n.node_type == NodeType::State && n.name == name)
            .map(|n| n.id)
            .collect();
        for other in colliding {
            let number = self.fresh_state_number();
            if let Some(node) = self.nodes.get_mut(&other) {
                node.name = number;
                node.held_name = false;
                log::info!("Zustand {} gibt Bezeichner '{}' frei, jetzt '{}'", other, name, node.name);
            }
        }
    }

    /// Übernimmt nach dem Umbenennen einer Schnittstelle deren Funktionen
    /// von einer gleichnamigen Schnittstelle, falls noch keine definiert sind.
    pub fn notify_interface_renamed(&mut self, edge_id: u64) {
        let Some((edge_type, label)) = self
            .edges
            .get(&edge_id)
            .filter(|e| e.functions.is_empty())
            .map(|e| (e.edge_type, e.label.clone()))
        else {
            return;
        };

        let shared = self
            .edges
            .values()
            .find(|e| {
                e.id != edge_id
                    && e.edge_type == edge_type
                    && e.label == label
                    && !e.functions.is_empty()
            })
            .map(|e| e.functions.clone());

        if let (Some(functions), Some(edge)) = (shared, self.edges.get_mut(&edge_id)) {
            edge.functions = functions;
            log::info!("Schnittstelle {} übernimmt Funktionen von '{}'", edge_id, label);
        }
    }

    // ── Persistenz ──────────────────────────────────────────────────

    /// Serialisiert das Diagramm als JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Liest ein Diagramm aus JSON, prüft Verweise und baut die Geometrie auf.
    pub fn from_json(content: &str, metrics: DiagramMetrics) -> anyhow::Result<Self> {
        let mut diagram: Diagram = serde_json::from_str(content)?;
        diagram.metrics = metrics;
        diagram.validate()?;

        let max_id = diagram
            .nodes
            .keys()
            .chain(diagram.edges.keys())
            .chain(diagram.actions.keys())
            .copied()
            .max()
            .unwrap_or(0);
        diagram.next_id = diagram.next_id.max(max_id);
        diagram.number_unnamed_states();
        diagram.rebuild_geometry();
        Ok(diagram)
    }

    /// Ältere Dateien speichern Zustände ohne Nummer.
    fn number_unnamed_states(&mut self) {
        let unnamed: Vec<u64> = self
            .nodes
            .values()
            .filter(|n| n.node_type == NodeType::State && n.name.is_empty())
            .map(|n| n.id)
            .collect();
        for id in unnamed {
            let number = self.fresh_state_number();
            if let Some(node) = self.nodes.get_mut(&id) {
                node.name = number;
            }
        }
    }

    /// Lädt ein Diagramm aus einer Datei.
    pub fn load_from_path(path: &Path, metrics: DiagramMetrics) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Diagramm nicht lesbar: {}", path.display()))?;
        let diagram = Self::from_json(&content, metrics)?;
        log::info!(
            "Diagramm geladen: {} Knoten, {} Kanten, {} Aktionen",
            diagram.node_count(),
            diagram.edge_count(),
            diagram.action_count()
        );
        Ok(diagram)
    }

    /// Speichert das Diagramm in eine Datei.
    pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
        let content = self.to_json()?;
        std::fs::write(path, content)
            .with_context(|| format!("Diagramm nicht schreibbar: {}", path.display()))?;
        log::info!("Diagramm gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Prüft, dass alle Verweise auflösbar sind und die Zähler noch Platz haben.
    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.next_id < u64::MAX, "ID-Zähler erschöpft");
        anyhow::ensure!(self.state_counter < u64::MAX, "Zustandszähler erschöpft");
        for key in self.nodes.keys().chain(self.edges.keys()).chain(self.actions.keys()) {
            anyhow::ensure!(*key < u64::MAX, "ID {} liegt außerhalb des gültigen Bereichs", key);
        }
        for (key, node) in &self.nodes {
            anyhow::ensure!(*key == node.id, "Knoten-Schlüssel {} passt nicht zu ID {}", key, node.id);
        }
        for (key, edge) in &self.edges {
            anyhow::ensure!(*key == edge.id, "Kanten-Schlüssel {} passt nicht zu ID {}", key, edge.id);
            anyhow::ensure!(
                self.nodes.contains_key(&edge.from) && self.nodes.contains_key(&edge.to),
                "Kante {} verweist auf fehlenden Knoten",
                edge.id
            );
            anyhow::ensure!(
                !(edge.is_self_loop() && edge.edge_type == EdgeType::Interface),
                "Schnittstelle {} ist eine Selbstschleife",
                edge.id
            );
        }
        for (key, action) in &self.actions {
            anyhow::ensure!(*key == action.id, "Aktions-Schlüssel {} passt nicht zu ID {}", key, action.id);
            anyhow::ensure!(
                self.edges.contains_key(&action.edge_id),
                "Aktion {} verweist auf fehlende Kante {}",
                action.id,
                action.edge_id
            );
        }
        Ok(())
    }
}
