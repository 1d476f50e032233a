use super::Harness;
use quest_map_editor::store::{StoreCall, StoreOp};
use quest_map_editor::{AppIntent, StoreError};

#[test]
fn test_delete_selected_removes_marker_and_document() {
    let mut h = Harness::new();
    let id = h.create_at(49.84, 24.02);
    let doc_id = h.remote_id(id).expect("Marker sollte persistiert sein");
    h.select(id);

    h.intent(AppIntent::DeleteSelectedRequested);
    // Lokal erst nach Remote-Erfolg entfernt
    assert!(h.state.markers.contains(id));

    h.settle();

    assert!(h.state.markers.is_empty());
    assert_eq!(h.state.selection.selected_marker_id, None);
    assert!(!h.store.contains(&doc_id));
    assert!(h.state.overlay.is_empty());
}

#[test]
fn test_failed_delete_keeps_marker_and_selection() {
    let mut h = Harness::new();
    let id = h.create_at(49.84, 24.02);
    let doc_id = h.remote_id(id).expect("Marker sollte persistiert sein");
    h.select(id);
    h.store.fail_next(
        StoreOp::Delete,
        StoreError::Http {
            status: 503,
            message: "unavailable".to_string(),
        },
    );

    h.intent(AppIntent::DeleteSelectedRequested);
    h.settle();

    assert!(h.state.markers.contains(id));
    assert_eq!(h.state.selection.selected_marker_id, Some(id));
    assert!(h.store.contains(&doc_id));
    assert!(h.state.markers.get(id).is_some_and(|m| !m.delete_requested));
}

#[test]
fn test_delete_without_selection_does_nothing() {
    let mut h = Harness::new();
    h.create_at(49.84, 24.02);
    let calls_before = h.store.calls().len();

    h.intent(AppIntent::DeleteSelectedRequested);
    h.settle();

    assert_eq!(h.state.markers.len(), 1);
    assert_eq!(h.store.calls().len(), calls_before);
}

#[test]
fn test_bulk_delete_is_atomic() {
    let mut h = Harness::new();
    for i in 0..5 {
        h.create_at(49.80 + i as f64 * 0.01, 24.0);
    }
    h.select(3);
    assert_eq!(h.store.document_count(), 5);

    h.store.fail_next(
        StoreOp::BatchDelete,
        StoreError::Transport("connection reset".to_string()),
    );
    h.intent(AppIntent::DeleteAllRequested);
    h.settle();

    assert_eq!(h.state.markers.len(), 5);
    assert_eq!(h.store.document_count(), 5);
    assert_eq!(h.state.selection.selected_marker_id, Some(3));

    h.intent(AppIntent::DeleteAllRequested);
    h.settle();

    assert!(h.state.markers.is_empty());
    assert_eq!(h.store.document_count(), 0);
    assert_eq!(h.state.selection.selected_marker_id, None);

    let batches = h
        .store
        .calls()
        .into_iter()
        .filter(|call| matches!(call, StoreCall::BatchDelete { doc_ids } if doc_ids.len() == 5))
        .count();
    assert_eq!(batches, 2);
}

#[test]
fn test_delete_all_on_empty_list_sends_nothing() {
    let mut h = Harness::new();

    h.intent(AppIntent::DeleteAllRequested);

    assert!(h.state.sync.outbox().is_empty());
    assert_eq!(h.state.overlay.rebuild_count(), 0);
}

#[test]
fn test_ids_are_not_reused_after_deletion() {
    let mut h = Harness::new();
    h.create_at(49.84, 24.02);
    h.create_at(49.85, 24.03);
    h.select(2);
    h.intent(AppIntent::DeleteSelectedRequested);
    h.settle();
    assert_eq!(h.state.markers.ids(), vec![1]);

    let id = h.create_at(49.86, 24.04);

    assert_eq!(id, 3);
    assert_eq!(h.state.markers.ids(), vec![1, 3]);
    let labels: Vec<String> = h.state.overlay.visuals().map(|v| v.label.clone()).collect();
    assert_eq!(labels, vec!["1", "3"]);
}

#[test]
fn test_overlay_rebuilt_once_per_reposition_and_delete() {
    let mut h = Harness::new();
    h.create_at(49.84, 24.02);
    h.create_at(49.85, 24.03);
    h.create_at(49.86, 24.04);
    h.select(1);
    let base = h.state.overlay.rebuild_count();

    h.intent(AppIntent::MarkerDragEnded {
        marker_id: 1,
        position: quest_map_editor::LatLng::new(49.90, 24.10),
    });
    assert_eq!(h.state.overlay.rebuild_count(), base + 1);
    // Update-Completion ändert nichts am Overlay
    h.settle();
    assert_eq!(h.state.overlay.rebuild_count(), base + 1);

    h.store.fail_next(
        StoreOp::Delete,
        StoreError::Transport("connection reset".to_string()),
    );
    h.intent(AppIntent::DeleteSelectedRequested);
    h.settle();
    assert_eq!(h.state.overlay.rebuild_count(), base + 1);
    assert!(h.state.markers.contains(1));

    h.intent(AppIntent::DeleteSelectedRequested);
    h.settle();
    assert_eq!(h.state.overlay.rebuild_count(), base + 2);
    assert_eq!(h.state.markers.ids(), vec![2, 3]);

    h.intent(AppIntent::DeleteAllRequested);
    h.settle();
    assert_eq!(h.state.overlay.rebuild_count(), base + 3);
    assert!(h.state.markers.is_empty());
}

#[test]
fn test_delete_all_with_pending_marker_leaves_no_document() {
    let mut h = Harness::new();
    h.create_at(49.84, 24.02);
    h.intent(AppIntent::MapClicked {
        position: quest_map_editor::LatLng::new(49.85, 24.03),
    });
    assert!(h.state.markers.get(2).is_some_and(|m| m.is_pending()));

    h.intent(AppIntent::DeleteAllRequested);

    // Reihenfolge wie im Worker: erst der Create, dann der Batch
    let completions = h.execute_pending();
    assert_eq!(completions.len(), 2);
    assert_eq!(h.store.document_count(), 1);
    for completion in completions {
        h.complete(completion);
    }
    assert!(h.state.markers.is_empty());

    h.settle();

    assert!(h.state.markers.is_empty());
    assert_eq!(h.store.document_count(), 0);
    assert!(matches!(
        h.store.calls().last(),
        Some(StoreCall::Delete { .. })
    ));
}
