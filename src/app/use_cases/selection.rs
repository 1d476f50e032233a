//! Use-Case-Funktionen für die Marker-Selektion.

use crate::app::AppState;

/// Selektiert einen Marker. Unbekannte IDs und erneutes Selektieren ändern nichts.
pub fn select_marker(state: &mut AppState, marker_id: u64) {
    if !state.markers.contains(marker_id) {
        log::warn!("Marker {} nicht gefunden, Selektion unverändert", marker_id);
        return;
    }
    if state.selection.is_selected(marker_id) {
        return;
    }

    state.selection.selected_marker_id = Some(marker_id);
    state.mark_overlay_dirty();
    log::debug!("Marker {} selektiert", marker_id);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if state.selection.selected_marker_id.take().is_some() {
        state.mark_overlay_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LatLng;

    #[test]
    fn select_existing_marker_marks_overlay_dirty_once() {
        let mut state = AppState::new();
        let id = state.markers.create(LatLng::new(49.84, 24.02));

        select_marker(&mut state, id);
        assert_eq!(state.selection.selected_marker_id, Some(id));
        assert!(state.take_overlay_dirty());

        select_marker(&mut state, id);
        assert!(!state.take_overlay_dirty());
    }

    #[test]
    fn select_unknown_marker_is_ignored() {
        let mut state = AppState::new();
        select_marker(&mut state, 42);
        assert_eq!(state.selection.selected_marker_id, None);
        assert!(!state.take_overlay_dirty());
    }

    #[test]
    fn clear_selection_only_dirties_when_selected() {
        let mut state = AppState::new();
        clear_selection(&mut state);
        assert!(!state.take_overlay_dirty());

        let id = state.markers.create(LatLng::new(49.84, 24.02));
        state.selection.selected_marker_id = Some(id);
        clear_selection(&mut state);
        assert!(state.take_overlay_dirty());
    }
}
