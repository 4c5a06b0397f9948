use crate::core::ElementRef;

/// Letzter Klick auf ein Element (für die Doppelklick-Erkennung)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastClick {
    pub element: ElementRef,
    pub timestamp_ms: u64,
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuell angeklicktes Element (höchstens eines)
    pub clicked: Option<ElementRef>,
    /// Letzter Klick auf das angeklickte Element
    pub last_click: Option<LastClick>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt das angeklickte Element.
    pub fn select(&mut self, element: ElementRef) {
        self.clicked = Some(element);
    }

    /// Hebt die Selektion auf; die Doppelklick-Historie verfällt mit.
    pub fn clear(&mut self) {
        self.clicked = None;
        self.last_click = None;
    }

    /// Liegt der letzte Klick auf `element` weniger als `threshold_ms` zurück?
    pub fn is_double_click(&self, element: ElementRef, timestamp_ms: u64, threshold_ms: u64) -> bool {
        self.last_click.is_some_and(|last| {
            last.element == element && timestamp_ms.saturating_sub(last.timestamp_ms) < threshold_ms
        })
    }
}
