//! Remote-Requests (Outbox-Einträge) und deren Ergebnisse.

use super::{MarkerStore, StoreError};
use crate::core::{LatLng, MarkerDocument};

/// Auszuführende Remote-Operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteOp {
    /// Dokument für einen neuen Marker anlegen
    Create {
        marker_id: u64,
        document: MarkerDocument,
    },
    /// Position eines persistierten Markers aktualisieren
    UpdateLocation {
        marker_id: u64,
        doc_id: String,
        location: LatLng,
    },
    /// Dokument eines Markers löschen
    Delete { marker_id: u64, doc_id: String },
    /// Dokument ohne lokalen Marker löschen (verwaistes Create-Ergebnis)
    DeleteOrphan { doc_id: String },
    /// Alle angegebenen Dokumente atomar löschen
    BatchDelete {
        marker_ids: Vec<u64>,
        doc_ids: Vec<String>,
    },
}

impl RemoteOp {
    /// Kurzbezeichnung für Logs und Status-Anzeige.
    pub fn label(&self) -> &'static str {
        match self {
            RemoteOp::Create { .. } => "create",
            RemoteOp::UpdateLocation { .. } => "update",
            RemoteOp::Delete { .. } => "delete",
            RemoteOp::DeleteOrphan { .. } => "delete-orphan",
            RemoteOp::BatchDelete { .. } => "batch-delete",
        }
    }
}

/// Ein Outbox-Eintrag mit Ticket zur Zuordnung der Completion.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    /// Fortlaufende Ticket-Nummer
    pub ticket: u64,
    /// Operation
    pub op: RemoteOp,
}

/// Ergebnis einer Remote-Operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteOutcome {
    Created {
        marker_id: u64,
        result: Result<String, StoreError>,
    },
    Updated {
        marker_id: u64,
        location: LatLng,
        result: Result<(), StoreError>,
    },
    Deleted {
        marker_id: u64,
        result: Result<(), StoreError>,
    },
    OrphanDeleted {
        doc_id: String,
        result: Result<(), StoreError>,
    },
    BatchDeleted {
        marker_ids: Vec<u64>,
        result: Result<(), StoreError>,
    },
}

/// Completion eines Requests, wird als Intent an den Controller gereicht.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCompletion {
    /// Ticket des zugehörigen Requests
    pub ticket: u64,
    /// Ergebnis
    pub outcome: RemoteOutcome,
}

impl RemoteCompletion {
    /// Gibt `true` zurück, wenn die Operation erfolgreich war.
    pub fn is_success(&self) -> bool {
        match &self.outcome {
            RemoteOutcome::Created { result, .. } => result.is_ok(),
            RemoteOutcome::Updated { result, .. }
            | RemoteOutcome::Deleted { result, .. }
            | RemoteOutcome::OrphanDeleted { result, .. }
            | RemoteOutcome::BatchDeleted { result, .. } => result.is_ok(),
        }
    }
}

/// Führt einen Request synchron gegen den Store aus.
pub fn execute(store: &dyn MarkerStore, request: RemoteRequest) -> RemoteCompletion {
    let outcome = match request.op {
        RemoteOp::Create {
            marker_id,
            document,
        } => RemoteOutcome::Created {
            marker_id,
            result: store.create(&document),
        },
        RemoteOp::UpdateLocation {
            marker_id,
            doc_id,
            location,
        } => RemoteOutcome::Updated {
            marker_id,
            location,
            result: store.update_location(&doc_id, location),
        },
        RemoteOp::Delete { marker_id, doc_id } => RemoteOutcome::Deleted {
            marker_id,
            result: store.delete(&doc_id),
        },
        RemoteOp::DeleteOrphan { doc_id } => {
            let result = store.delete(&doc_id);
            RemoteOutcome::OrphanDeleted { doc_id, result }
        }
        RemoteOp::BatchDelete {
            marker_ids,
            doc_ids,
        } => RemoteOutcome::BatchDeleted {
            marker_ids,
            result: store.batch_delete(&doc_ids),
        },
    };

    RemoteCompletion {
        ticket: request.ticket,
        outcome,
    }
}
