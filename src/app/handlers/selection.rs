//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert einen Marker.
pub fn select(state: &mut AppState, marker_id: u64) {
    use_cases::selection::select_marker(state, marker_id);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
