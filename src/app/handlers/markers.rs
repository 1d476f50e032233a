//! Handler für Marker-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LatLng;

/// Legt einen Marker an der Koordinate an.
pub fn create(state: &mut AppState, position: LatLng) -> anyhow::Result<()> {
    anyhow::ensure!(
        position.is_valid(),
        "Ungültige Koordinate für neuen Marker: {}",
        position
    );
    use_cases::markers::create_marker(state, position);
    Ok(())
}

/// Verschiebt einen Marker.
pub fn reposition(state: &mut AppState, marker_id: u64, position: LatLng) -> anyhow::Result<()> {
    anyhow::ensure!(
        position.is_valid(),
        "Ungültige Koordinate für Marker {}: {}",
        marker_id,
        position
    );
    use_cases::markers::reposition_marker(state, marker_id, position);
    Ok(())
}

/// Löscht den selektierten Marker.
pub fn delete_selected(state: &mut AppState) {
    use_cases::markers::delete_selected_marker(state);
}

/// Löscht alle Marker.
pub fn delete_all(state: &mut AppState) {
    use_cases::markers::delete_all_markers(state);
}
