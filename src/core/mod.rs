//! Core-Domänentypen: Knoten, Kanten, Aktionen, Diagramm und Geometrie.

pub mod action;
pub mod diagram;
pub mod edge;
pub mod element;
/// Geometrie-Hilfen (Kontrollpunkte, Kurvenabtastung, Hitboxen)
pub mod geometry;
pub mod node;

pub use action::Action;
pub use diagram::Diagram;
pub use edge::{Edge, EdgeType, OperationAccess};
pub use element::ElementRef;
pub use geometry::{third_point, third_point_with_ratio, DiagramMetrics, Rect};
pub use node::{Node, NodeType};
