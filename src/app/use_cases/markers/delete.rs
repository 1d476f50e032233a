//! Use-Case: Marker löschen (Einzeln und alle).

use crate::app::AppState;
use crate::store::RemoteOp;

/// Löscht den selektierten Marker.
///
/// Persistierte Marker werden erst nach erfolgreichem Remote-Delete lokal
/// entfernt. Für noch laufende Creates wird das Löschen vorgemerkt.
/// Marker ohne Dokument (`Failed`) werden sofort entfernt.
pub fn delete_selected_marker(state: &mut AppState) {
    let Some(marker_id) = state.selection.selected_marker_id else {
        log::debug!("Kein Marker selektiert, nichts zu löschen");
        return;
    };
    let Some(marker) = state.markers.get_mut(marker_id) else {
        log::warn!("Selektierter Marker {} existiert nicht mehr", marker_id);
        state.selection.selected_marker_id = None;
        state.mark_overlay_dirty();
        return;
    };
    if marker.delete_requested {
        log::debug!("Löschen von Marker {} läuft bereits", marker_id);
        return;
    }

    if marker.is_failed() {
        state.markers.remove(marker_id);
        state.selection.selected_marker_id = None;
        state.mark_overlay_dirty();
        log::info!("Marker {} ohne Dokument lokal gelöscht", marker_id);
        return;
    }

    marker.delete_requested = true;
    match marker.remote_id().map(str::to_string) {
        Some(doc_id) => {
            state.sync.enqueue(RemoteOp::Delete { marker_id, doc_id });
            log::info!("Löschen von Marker {} angefordert", marker_id);
        }
        None => log::info!(
            "Marker {} noch nicht persistiert, Löschen nach Create",
            marker_id
        ),
    }
}

/// Löscht alle Marker über einen atomaren Batch.
///
/// Ohne persistierte Dokumente wird die Liste sofort geleert. Sonst wird
/// lokal erst nach erfolgreichem Commit entfernt (siehe `apply_completion`).
/// Noch laufende Creates werden zum Löschen vorgemerkt, ihr Dokument wird
/// gelöscht, sobald der Create durch ist.
pub fn delete_all_markers(state: &mut AppState) {
    if state.markers.is_empty() {
        log::debug!("Keine Marker vorhanden");
        return;
    }

    let marker_ids = state.markers.ids();
    let doc_ids: Vec<String> = state
        .markers
        .iter()
        .filter_map(|marker| marker.remote_id().map(str::to_string))
        .collect();

    if doc_ids.is_empty() {
        state.markers.clear();
        state.selection.selected_marker_id = None;
        state.mark_overlay_dirty();
        log::info!(
            "{} Marker ohne Dokument lokal gelöscht",
            marker_ids.len()
        );
        return;
    }

    log::info!(
        "Batch-Löschen von {} Markern ({} Dokumente) angefordert",
        marker_ids.len(),
        doc_ids.len()
    );
    for marker in state.markers.iter_mut().filter(|m| m.is_pending()) {
        marker.delete_requested = true;
    }
    state.sync.enqueue(RemoteOp::BatchDelete {
        marker_ids,
        doc_ids,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LatLng, SyncStatus};

    fn state_with(statuses: &[SyncStatus]) -> AppState {
        let mut state = AppState::new();
        for (i, status) in statuses.iter().enumerate() {
            let id = state.markers.create(LatLng::new(49.0 + i as f64 * 0.01, 24.0));
            if let Some(marker) = state.markers.get_mut(id) {
                marker.sync = status.clone();
            }
        }
        state
    }

    fn persisted(doc_id: &str) -> SyncStatus {
        SyncStatus::Persisted {
            doc_id: doc_id.to_string(),
        }
    }

    #[test]
    fn without_selection_nothing_happens() {
        let mut state = state_with(&[persisted("a")]);

        delete_selected_marker(&mut state);

        assert_eq!(state.markers.len(), 1);
        assert!(state.sync.outbox().is_empty());
    }

    #[test]
    fn persisted_marker_waits_for_remote_delete() {
        let mut state = state_with(&[persisted("a")]);
        state.selection.selected_marker_id = Some(1);

        delete_selected_marker(&mut state);
        delete_selected_marker(&mut state);

        assert_eq!(state.markers.len(), 1);
        assert_eq!(state.selection.selected_marker_id, Some(1));
        assert_eq!(state.sync.outbox().len(), 1);
        assert_eq!(
            state.sync.outbox()[0].op,
            RemoteOp::Delete {
                marker_id: 1,
                doc_id: "a".to_string()
            }
        );
    }

    #[test]
    fn pending_marker_is_flagged() {
        let mut state = state_with(&[SyncStatus::Pending]);
        state.selection.selected_marker_id = Some(1);

        delete_selected_marker(&mut state);

        assert!(state.sync.outbox().is_empty());
        assert!(state.markers.get(1).is_some_and(|m| m.delete_requested));
    }

    #[test]
    fn failed_marker_is_removed_immediately() {
        let mut state = state_with(&[SyncStatus::Failed {
            reason: "offline".to_string(),
        }]);
        state.selection.selected_marker_id = Some(1);

        delete_selected_marker(&mut state);

        assert!(state.markers.is_empty());
        assert_eq!(state.selection.selected_marker_id, None);
        assert!(state.take_overlay_dirty());
    }

    #[test]
    fn delete_all_batches_persisted_documents() {
        let mut state = state_with(&[persisted("a"), SyncStatus::Pending, persisted("c")]);

        delete_all_markers(&mut state);

        assert_eq!(state.markers.len(), 3);
        assert_eq!(
            state.sync.outbox()[0].op,
            RemoteOp::BatchDelete {
                marker_ids: vec![1, 2, 3],
                doc_ids: vec!["a".to_string(), "c".to_string()],
            }
        );
        let flagged: Vec<u64> = state
            .markers
            .iter()
            .filter(|m| m.delete_requested)
            .map(|m| m.id)
            .collect();
        assert_eq!(flagged, vec![2]);
    }

    #[test]
    fn delete_all_without_documents_clears_locally() {
        let mut state = state_with(&[SyncStatus::Pending, SyncStatus::Pending]);
        state.selection.selected_marker_id = Some(2);

        delete_all_markers(&mut state);

        assert!(state.markers.is_empty());
        assert_eq!(state.selection.selected_marker_id, None);
        assert!(state.sync.outbox().is_empty());
    }
}
