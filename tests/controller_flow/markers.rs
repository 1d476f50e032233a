use super::Harness;
use quest_map_editor::store::StoreCall;
use quest_map_editor::{AppIntent, LatLng};

#[test]
fn test_create_persists_marker_with_remote_id() {
    let mut h = Harness::new();
    let position = LatLng::new(49.84336818523409, 24.026482528084973);

    h.intent(AppIntent::MapClicked { position });

    let marker = h.state.markers.get(1).expect("Marker 1 sollte existieren");
    assert!(marker.is_pending());
    assert_eq!(marker.position, Some(position));

    h.settle();

    let doc_id = h.remote_id(1).expect("Marker 1 sollte persistiert sein");
    assert!(!doc_id.is_empty());
    let document = h.store.document(&doc_id).expect("Dokument sollte existieren");
    assert_eq!(document.id, 1);
    assert_eq!(document.location, position);
}

#[test]
fn test_ids_follow_creation_order() {
    let mut h = Harness::new();

    for i in 0..3 {
        h.create_at(49.84 + i as f64 * 0.01, 24.02);
    }

    let labels: Vec<String> = h.state.overlay.visuals().map(|v| v.label.clone()).collect();
    assert_eq!(h.state.markers.ids(), vec![1, 2, 3]);
    assert_eq!(labels, vec!["1", "2", "3"]);
    assert_eq!(h.store.document_count(), 3);
}

#[test]
fn test_reposition_twice_sends_identical_updates() {
    let mut h = Harness::new();
    let id = h.create_at(49.84, 24.02);
    let doc_id = h.remote_id(id).expect("Marker sollte persistiert sein");
    h.select(id);
    let target = LatLng::new(49.85, 24.05);

    for _ in 0..2 {
        h.intent(AppIntent::MarkerDragEnded {
            marker_id: id,
            position: target,
        });
        h.settle();
    }

    let updates: Vec<StoreCall> = h
        .store
        .calls()
        .into_iter()
        .filter(|call| matches!(call, StoreCall::Update { .. }))
        .collect();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0], updates[1]);
    assert_eq!(
        updates[0],
        StoreCall::Update {
            doc_id: doc_id.clone(),
            location: target,
        }
    );
    assert_eq!(h.store.document(&doc_id).map(|d| d.location), Some(target));
    assert_eq!(h.remote_id(id), Some(doc_id));
}

#[test]
fn test_drag_of_unselected_marker_is_ignored() {
    let mut h = Harness::new();
    let id = h.create_at(49.84, 24.02);

    h.intent(AppIntent::MarkerDragEnded {
        marker_id: id,
        position: LatLng::new(10.0, 10.0),
    });

    assert!(h.state.sync.outbox().is_empty());
    assert_eq!(
        h.state.markers.get(id).and_then(|m| m.position),
        Some(LatLng::new(49.84, 24.02))
    );
}

#[test]
fn test_overlay_rebuilt_once_per_state_change() {
    let mut h = Harness::new();
    assert_eq!(h.state.overlay.rebuild_count(), 0);

    h.intent(AppIntent::MapClicked {
        position: LatLng::new(49.84, 24.02),
    });
    assert_eq!(h.state.overlay.rebuild_count(), 1);

    // Create-Completion ändert den Sync-Status
    h.settle();
    assert_eq!(h.state.overlay.rebuild_count(), 2);

    h.select(1);
    assert_eq!(h.state.overlay.rebuild_count(), 3);
    assert_eq!(h.state.overlay.visual(1).map(|v| v.draggable), Some(true));

    // Erneutes Selektieren ändert nichts
    h.select(1);
    assert_eq!(h.state.overlay.rebuild_count(), 3);

    h.intent(AppIntent::ClearSelectionRequested);
    assert_eq!(h.state.overlay.rebuild_count(), 4);
    assert_eq!(h.state.overlay.visual(1).map(|v| v.draggable), Some(false));
}

#[test]
fn test_failed_create_keeps_marker_without_remote_id() {
    let mut h = Harness::new();
    h.store.set_offline(true);

    let id = h.create_at(49.84, 24.02);

    let marker = h.state.markers.get(id).expect("Marker sollte bleiben");
    assert!(marker.is_failed());
    assert_eq!(h.remote_id(id), None);
    assert_eq!(h.state.markers.failed_count(), 1);
    assert_eq!(h.state.sync.failed_requests(), 1);
}
