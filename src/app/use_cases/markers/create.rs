//! Use-Case: Neuen Marker an einer Koordinate anlegen.

use crate::app::AppState;
use crate::core::{LatLng, MarkerDocument};
use crate::store::RemoteOp;

/// Legt einen Marker sofort lokal an und reiht den Create-Request ein.
///
/// Der Marker bleibt `Pending`, bis die Completion die Dokument-ID liefert.
/// Gibt die neue Marker-ID zurück.
pub fn create_marker(state: &mut AppState, position: LatLng) -> u64 {
    let marker_id = state.markers.create(position);
    state.sync.enqueue(RemoteOp::Create {
        marker_id,
        document: MarkerDocument::now(marker_id, position),
    });
    state.mark_overlay_dirty();

    log::info!("Marker {} an {} angelegt", marker_id, position);
    marker_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SyncStatus;

    #[test]
    fn create_appends_pending_marker_and_enqueues_request() {
        let mut state = AppState::new();
        let position = LatLng::new(49.84, 24.02);

        let id = create_marker(&mut state, position);

        assert_eq!(id, 1);
        let marker = state.markers.get(id).expect("Marker fehlt");
        assert_eq!(marker.sync, SyncStatus::Pending);
        assert_eq!(marker.position, Some(position));

        let outbox = state.sync.outbox();
        assert_eq!(outbox.len(), 1);
        match &outbox[0].op {
            RemoteOp::Create {
                marker_id,
                document,
            } => {
                assert_eq!(*marker_id, 1);
                assert_eq!(document.id, 1);
                assert_eq!(document.location, position);
            }
            other => panic!("unerwartete Operation: {:?}", other),
        }
        assert!(state.take_overlay_dirty());
    }

    #[test]
    fn ids_follow_creation_order() {
        let mut state = AppState::new();
        let ids: Vec<u64> = (0..3)
            .map(|i| create_marker(&mut state, LatLng::new(49.0 + i as f64, 24.0)))
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
