/// Selektions-Zustand (höchstens ein Marker).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuell selektierter Marker
    pub selected_marker_id: Option<u64>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektions-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn `marker_id` selektiert ist.
    pub fn is_selected(&self, marker_id: u64) -> bool {
        self.selected_marker_id == Some(marker_id)
    }

    /// Hebt die Selektion auf, falls sie auf `marker_id` zeigt.
    /// Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn clear_if(&mut self, marker_id: u64) -> bool {
        if self.is_selected(marker_id) {
            self.selected_marker_id = None;
            true
        } else {
            false
        }
    }
}
