//! Remote-Store: Vertrag, Implementierungen (Firestore, In-Memory) und Worker-Thread.
//!
//! Use-Cases sprechen den Store nie direkt an. Sie legen `RemoteRequest`s in
//! die Outbox des `AppState`; der Host übergibt diese an den [`RemoteWorker`],
//! dessen `RemoteCompletion`s als Intents zurück in den Controller laufen.

mod error;
pub mod firestore;
pub mod memory;
pub mod request;
pub mod worker;

pub use error::StoreError;
pub use firestore::{FirestoreConfig, FirestoreStore};
pub use memory::{MemoryStore, StoreCall, StoreOp};
pub use request::{execute, RemoteCompletion, RemoteOp, RemoteOutcome, RemoteRequest};
pub use worker::{RemoteWorker, Waker};

use crate::core::{LatLng, MarkerDocument};

/// Maximale Anzahl Writes pro atomarem Batch (Firestore-Limit).
pub const MAX_BATCH_WRITES: usize = 500;

/// Dokument-Collection für Marker.
pub const DEFAULT_COLLECTION: &str = "quests";

/// Vertrag eines flachen, per ID adressierten Dokumentenspeichers.
///
/// Alle Aufrufe sind blockierend und laufen ausschließlich im Worker-Thread.
pub trait MarkerStore: Send + Sync {
    /// Kurzname des Backends für Status-Anzeige und Logs.
    fn backend_name(&self) -> &'static str;

    /// Legt ein Dokument an und liefert die vergebene Dokument-ID.
    fn create(&self, document: &MarkerDocument) -> Result<String, StoreError>;

    /// Überschreibt das Feld `location` eines bestehenden Dokuments.
    fn update_location(&self, doc_id: &str, location: LatLng) -> Result<(), StoreError>;

    /// Löscht ein Dokument.
    fn delete(&self, doc_id: &str) -> Result<(), StoreError>;

    /// Löscht alle Dokumente atomar (alles oder nichts).
    fn batch_delete(&self, doc_ids: &[String]) -> Result<(), StoreError>;
}

/// Prüft eine Dokument-ID auf einen gültigen, einstufigen Pfad.
pub fn validate_doc_id(doc_id: &str) -> Result<(), StoreError> {
    if doc_id.is_empty() || doc_id.contains('/') || doc_id == "." || doc_id == ".." {
        return Err(StoreError::InvalidDocumentId(doc_id.to_string()));
    }
    Ok(())
}
