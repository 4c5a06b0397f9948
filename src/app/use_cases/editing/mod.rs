//! Use-Case-Funktionen für das Bearbeiten des Diagramms.
//!
//! - `add_node`: Knoten anlegen (inkl. Wachsen der Zeichenfläche)
//! - `add_action`: Aktion an eine Kante hängen
//! - `connect`: Kanten per Drücken/Ziehen/Loslassen anlegen
//! - `delete`: Elemente löschen
//! - `rename`: Bearbeiten-Dialoge pro Elementart

mod add_action;
mod add_node;
mod connect;
mod delete;
mod rename;

pub use add_action::add_action_at;
pub use add_node::add_node_at;
pub use connect::{begin_edge_at, finish_edge_at, update_edge_preview};
pub use delete::{delete_at, delete_selected};
pub use rename::{edit_element, edit_functions, edit_selected};
