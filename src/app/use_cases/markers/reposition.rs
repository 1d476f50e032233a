//! Use-Case: Marker nach Drag-Ende verschieben.

use crate::app::AppState;
use crate::core::{LatLng, SyncStatus};
use crate::store::RemoteOp;

/// Setzt die Position optimistisch und synchronisiert sie zum Store.
///
/// - `Persisted`: Update-Request wird sofort eingereiht.
/// - `Pending`: `location_dirty` wird gesetzt, das Update folgt nach dem Create.
/// - `Failed`: kein Dokument vorhanden, nur lokale Änderung.
pub fn reposition_marker(state: &mut AppState, marker_id: u64, position: LatLng) {
    let Some(marker) = state.markers.get_mut(marker_id) else {
        log::warn!("Marker {} nicht gefunden, Verschieben ignoriert", marker_id);
        return;
    };

    marker.position = Some(position);
    match &marker.sync {
        SyncStatus::Persisted { doc_id } => {
            state.sync.enqueue(RemoteOp::UpdateLocation {
                marker_id,
                doc_id: doc_id.clone(),
                location: position,
            });
        }
        SyncStatus::Pending => {
            marker.location_dirty = true;
            log::debug!(
                "Marker {} noch nicht persistiert, Update nach Create",
                marker_id
            );
        }
        SyncStatus::Failed { .. } => {
            log::warn!(
                "Marker {} hat kein Dokument, Position nur lokal geändert",
                marker_id
            );
        }
    }
    state.mark_overlay_dirty();

    log::info!("Marker {} nach {} verschoben", marker_id, position);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted_state() -> (AppState, u64) {
        let mut state = AppState::new();
        let id = state.markers.create(LatLng::new(49.84, 24.02));
        if let Some(marker) = state.markers.get_mut(id) {
            marker.sync = SyncStatus::Persisted {
                doc_id: "doc1".to_string(),
            };
        }
        (state, id)
    }

    #[test]
    fn persisted_marker_enqueues_update() {
        let (mut state, id) = persisted_state();
        let target = LatLng::new(49.85, 24.03);

        reposition_marker(&mut state, id, target);

        assert_eq!(state.markers.get(id).and_then(|m| m.position), Some(target));
        assert_eq!(
            state.sync.outbox()[0].op,
            RemoteOp::UpdateLocation {
                marker_id: id,
                doc_id: "doc1".to_string(),
                location: target,
            }
        );
    }

    #[test]
    fn pending_marker_defers_update() {
        let mut state = AppState::new();
        let id = state.markers.create(LatLng::new(49.84, 24.02));

        reposition_marker(&mut state, id, LatLng::new(49.9, 24.1));

        assert!(state.sync.outbox().is_empty());
        assert!(state.markers.get(id).is_some_and(|m| m.location_dirty));
    }

    #[test]
    fn failed_marker_changes_locally_only() {
        let (mut state, id) = persisted_state();
        if let Some(marker) = state.markers.get_mut(id) {
            marker.sync = SyncStatus::Failed {
                reason: "offline".to_string(),
            };
        }

        reposition_marker(&mut state, id, LatLng::new(49.9, 24.1));

        assert!(state.sync.outbox().is_empty());
        assert!(state.markers.get(id).is_some_and(|m| !m.location_dirty));
    }

    #[test]
    fn unknown_marker_is_ignored() {
        let mut state = AppState::new();
        reposition_marker(&mut state, 7, LatLng::new(1.0, 1.0));
        assert!(!state.take_overlay_dirty());
    }
}
