//! Use-Case: Ergebnisse des Remote-Workers in den lokalen Zustand übernehmen.
//!
//! Jeder Fehler wird hier geloggt und nicht weitergereicht.

use crate::app::AppState;
use crate::core::{LatLng, SyncStatus};
use crate::store::{RemoteCompletion, RemoteOp, RemoteOutcome, StoreError};

/// Übernimmt eine Completion.
pub fn apply_completion(state: &mut AppState, completion: RemoteCompletion) {
    state
        .sync
        .complete(completion.ticket, completion.is_success());
    let ticket = completion.ticket;

    match completion.outcome {
        RemoteOutcome::Created { marker_id, result } => match result {
            Ok(doc_id) => on_created(state, marker_id, doc_id),
            Err(err) => on_create_failed(state, ticket, marker_id, err),
        },
        RemoteOutcome::Updated {
            marker_id,
            location,
            result,
        } => on_updated(ticket, marker_id, location, result),
        RemoteOutcome::Deleted { marker_id, result } => match result {
            Ok(()) => {
                remove_marker(state, marker_id);
                log::info!("Marker {} gelöscht", marker_id);
            }
            Err(err) => {
                if let Some(marker) = state.markers.get_mut(marker_id) {
                    marker.delete_requested = false;
                }
                log::error!(
                    "Löschen von Marker {} fehlgeschlagen (#{}): {}",
                    marker_id,
                    ticket,
                    err
                );
            }
        },
        RemoteOutcome::OrphanDeleted { doc_id, result } => match result {
            Ok(()) => log::info!("Verwaistes Dokument {} gelöscht", doc_id),
            Err(err) => log::error!(
                "Verwaistes Dokument {} konnte nicht gelöscht werden (#{}): {}",
                doc_id,
                ticket,
                err
            ),
        },
        RemoteOutcome::BatchDeleted { marker_ids, result } => match result {
            Ok(()) => {
                for marker_id in &marker_ids {
                    remove_marker(state, *marker_id);
                }
                log::info!("{} Marker per Batch gelöscht", marker_ids.len());
            }
            Err(err) => log::error!(
                "Batch-Löschen von {} Markern fehlgeschlagen (#{}): {}",
                marker_ids.len(),
                ticket,
                err
            ),
        },
    }
}

fn on_created(state: &mut AppState, marker_id: u64, doc_id: String) {
    let Some(marker) = state.markers.get_mut(marker_id) else {
        log::warn!(
            "Marker {} existiert nicht mehr, lösche verwaistes Dokument {}",
            marker_id,
            doc_id
        );
        state.sync.enqueue(RemoteOp::DeleteOrphan { doc_id });
        return;
    };

    marker.sync = SyncStatus::Persisted {
        doc_id: doc_id.clone(),
    };
    log::info!("Marker {} als Dokument {} gespeichert", marker_id, doc_id);

    if marker.delete_requested {
        state.sync.enqueue(RemoteOp::Delete { marker_id, doc_id });
    } else if marker.location_dirty {
        marker.location_dirty = false;
        if let Some(location) = marker.position {
            state.sync.enqueue(RemoteOp::UpdateLocation {
                marker_id,
                doc_id,
                location,
            });
        }
    }
    state.mark_overlay_dirty();
}

fn on_create_failed(state: &mut AppState, ticket: u64, marker_id: u64, err: StoreError) {
    log::error!(
        "Anlegen von Marker {} fehlgeschlagen (#{}): {}",
        marker_id,
        ticket,
        err
    );
    let Some(marker) = state.markers.get_mut(marker_id) else {
        return;
    };

    marker.sync = SyncStatus::Failed {
        reason: err.to_string(),
    };
    marker.location_dirty = false;
    if marker.delete_requested {
        remove_marker(state, marker_id);
    }
    state.mark_overlay_dirty();
}

fn on_updated(ticket: u64, marker_id: u64, location: LatLng, result: Result<(), StoreError>) {
    match result {
        Ok(()) => log::debug!("Position von Marker {} gespeichert: {}", marker_id, location),
        // Kein Rollback: die lokale Position bleibt bestehen
        Err(err) => log::error!(
            "Position von Marker {} nicht gespeichert (#{}): {}",
            marker_id,
            ticket,
            err
        ),
    }
}

/// Entfernt einen Marker lokal und hebt ggf. dessen Selektion auf.
fn remove_marker(state: &mut AppState, marker_id: u64) {
    if state.markers.remove(marker_id).is_some() {
        state.selection.clear_if(marker_id);
        state.mark_overlay_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::markers;

    fn created(ticket: u64, marker_id: u64, result: Result<String, StoreError>) -> RemoteCompletion {
        RemoteCompletion {
            ticket,
            outcome: RemoteOutcome::Created { marker_id, result },
        }
    }

    #[test]
    fn created_sets_persisted_status() {
        let mut state = AppState::new();
        let id = markers::create_marker(&mut state, LatLng::new(49.84, 24.02));
        let ticket = state.sync.take_outbox()[0].ticket;
        state.take_overlay_dirty();

        apply_completion(&mut state, created(ticket, id, Ok("doc1".to_string())));

        assert_eq!(
            state.markers.get(id).and_then(|m| m.remote_id()),
            Some("doc1")
        );
        assert_eq!(state.sync.in_flight_count(), 0);
        assert!(state.take_overlay_dirty());
    }

    #[test]
    fn failed_create_keeps_marker_as_failed() {
        let mut state = AppState::new();
        let id = markers::create_marker(&mut state, LatLng::new(49.84, 24.02));
        let err = StoreError::Transport("offline".to_string());

        apply_completion(&mut state, created(1, id, Err(err)));

        let marker = state.markers.get(id).expect("Marker fehlt");
        assert!(marker.is_failed());
        assert_eq!(marker.remote_id(), None);
        assert_eq!(state.sync.failed_requests(), 1);
    }

    #[test]
    fn created_for_removed_marker_deletes_orphan() {
        let mut state = AppState::new();

        apply_completion(&mut state, created(1, 5, Ok("lost".to_string())));

        assert_eq!(
            state.sync.outbox()[0].op,
            RemoteOp::DeleteOrphan {
                doc_id: "lost".to_string()
            }
        );
    }

    #[test]
    fn created_flushes_deferred_update() {
        let mut state = AppState::new();
        let id = markers::create_marker(&mut state, LatLng::new(49.84, 24.02));
        state.sync.take_outbox();
        let moved = LatLng::new(49.9, 24.1);
        markers::reposition_marker(&mut state, id, moved);

        apply_completion(&mut state, created(1, id, Ok("doc1".to_string())));

        assert_eq!(
            state.sync.outbox()[0].op,
            RemoteOp::UpdateLocation {
                marker_id: id,
                doc_id: "doc1".to_string(),
                location: moved,
            }
        );
        assert!(state.markers.get(id).is_some_and(|m| !m.location_dirty));
    }

    #[test]
    fn failed_create_of_deleted_marker_removes_it() {
        let mut state = AppState::new();
        let id = markers::create_marker(&mut state, LatLng::new(49.84, 24.02));
        state.selection.selected_marker_id = Some(id);
        markers::delete_selected_marker(&mut state);

        apply_completion(
            &mut state,
            created(1, id, Err(StoreError::Transport("offline".to_string()))),
        );

        assert!(state.markers.is_empty());
        assert_eq!(state.selection.selected_marker_id, None);
    }

    #[test]
    fn failed_delete_keeps_marker_and_allows_retry() {
        let mut state = AppState::new();
        let id = state.markers.create(LatLng::new(49.84, 24.02));
        if let Some(marker) = state.markers.get_mut(id) {
            marker.sync = SyncStatus::Persisted {
                doc_id: "doc1".to_string(),
            };
        }
        state.selection.selected_marker_id = Some(id);
        markers::delete_selected_marker(&mut state);
        let ticket = state.sync.take_outbox()[0].ticket;

        apply_completion(
            &mut state,
            RemoteCompletion {
                ticket,
                outcome: RemoteOutcome::Deleted {
                    marker_id: id,
                    result: Err(StoreError::Http {
                        status: 503,
                        message: "unavailable".to_string(),
                    }),
                },
            },
        );

        assert_eq!(state.markers.len(), 1);
        assert_eq!(state.selection.selected_marker_id, Some(id));
        assert!(state.markers.get(id).is_some_and(|m| !m.delete_requested));

        markers::delete_selected_marker(&mut state);
        assert_eq!(state.sync.outbox().len(), 1);
    }

    #[test]
    fn batch_delete_success_removes_only_snapshot() {
        let mut state = AppState::new();
        for i in 0..3 {
            state.markers.create(LatLng::new(49.0 + i as f64 * 0.1, 24.0));
        }
        state.selection.selected_marker_id = Some(2);

        apply_completion(
            &mut state,
            RemoteCompletion {
                ticket: 1,
                outcome: RemoteOutcome::BatchDeleted {
                    marker_ids: vec![1, 2],
                    result: Ok(()),
                },
            },
        );

        assert_eq!(state.markers.ids(), vec![3]);
        assert_eq!(state.selection.selected_marker_id, None);
    }
}
