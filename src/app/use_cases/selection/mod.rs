//! Use-Case-Funktionen für Selektion und Ziehen.
//!
//! - `pick`: Klick-Protokoll im Selektionsmodus (Handles, Doppelklick)
//! - `drag`: Ziehen des angeklickten Elements bzw. Handles
//! - `context_menu`: Kontextmenü für das angeklickte Element

mod context_menu;
mod drag;
mod pick;

pub use context_menu::{hide_context_menu, show_context_menu_at};
pub use drag::{drag_selection_to, end_drag};
pub use pick::select_at;

use crate::app::AppState;

/// Löscht die aktuelle Selektion explizit (inkl. Zieh-Handles).
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
    state.interaction.handle = crate::app::state::DragHandle::None;
}
