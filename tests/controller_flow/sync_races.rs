use super::Harness;
use quest_map_editor::store::StoreCall;
use quest_map_editor::{AppIntent, LatLng};

#[test]
fn test_delete_of_pending_marker_waits_for_create() {
    let mut h = Harness::new();
    h.intent(AppIntent::MapClicked {
        position: LatLng::new(49.84, 24.02),
    });
    h.select(1);

    h.intent(AppIntent::DeleteSelectedRequested);

    // Noch kein Delete: es gibt erst einen Create-Request
    assert_eq!(h.state.sync.outbox().len(), 1);
    assert!(h.state.markers.contains(1));

    h.settle();

    assert!(h.state.markers.is_empty());
    assert_eq!(h.store.document_count(), 0);
    let calls = h.store.calls();
    assert!(matches!(calls[0], StoreCall::Create { id: 1, .. }));
    assert!(matches!(calls[1], StoreCall::Delete { .. }));
}

#[test]
fn test_reposition_of_pending_marker_is_sent_after_create() {
    let mut h = Harness::new();
    h.intent(AppIntent::MapClicked {
        position: LatLng::new(49.84, 24.02),
    });
    h.select(1);
    let target = LatLng::new(49.90, 24.10);

    h.intent(AppIntent::MarkerDragEnded {
        marker_id: 1,
        position: target,
    });
    assert_eq!(h.state.sync.outbox().len(), 1);

    h.settle();

    let doc_id = h.remote_id(1).expect("Marker sollte persistiert sein");
    assert_eq!(h.store.document(&doc_id).map(|d| d.location), Some(target));
    assert!(matches!(
        h.store.calls().last(),
        Some(StoreCall::Update { location, .. }) if *location == target
    ));
}

#[test]
fn test_created_document_of_removed_marker_is_deleted() {
    let mut h = Harness::new();
    h.intent(AppIntent::MapClicked {
        position: LatLng::new(49.84, 24.02),
    });
    // Create ausgeführt, Completion aber noch nicht übernommen
    let completions = h.execute_pending();
    assert_eq!(h.store.document_count(), 1);

    // Delete-All ohne persistierte Dokumente leert die Liste sofort
    h.intent(AppIntent::DeleteAllRequested);
    assert!(h.state.markers.is_empty());

    for completion in completions {
        h.complete(completion);
    }
    h.settle();

    assert_eq!(h.store.document_count(), 0);
    assert!(h.state.markers.is_empty());
}

#[test]
fn test_marker_created_during_batch_survives() {
    let mut h = Harness::new();
    h.create_at(49.84, 24.02);
    h.intent(AppIntent::DeleteAllRequested);
    let batch = h.execute_pending();

    h.intent(AppIntent::MapClicked {
        position: LatLng::new(49.85, 24.03),
    });
    for completion in batch {
        h.complete(completion);
    }
    h.settle();

    assert_eq!(h.state.markers.ids(), vec![2]);
    assert!(h.remote_id(2).is_some());
    assert_eq!(h.store.document_count(), 1);
}
