//! In-Memory-Store für den Offline-Betrieb und für Tests.
//!
//! Verhält sich wie Firestore: Update auf ein fehlendes Dokument schlägt fehl,
//! Löschen eines fehlenden Dokuments gelingt, Batches sind atomar.

use super::{validate_doc_id, MarkerStore, StoreError, MAX_BATCH_WRITES};
use crate::core::{LatLng, MarkerDocument};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// Art eines Store-Aufrufs (für gezielte Fehlerinjektion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Create,
    Update,
    Delete,
    BatchDelete,
}

/// Protokollierter Store-Aufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Create { id: u64, location: LatLng },
    Update { doc_id: String, location: LatLng },
    Delete { doc_id: String },
    BatchDelete { doc_ids: Vec<String> },
}

#[derive(Default)]
struct MemoryInner {
    documents: BTreeMap<String, MarkerDocument>,
    next_doc: u64,
    failures: VecDeque<(StoreOp, StoreError)>,
    offline: bool,
    calls: Vec<StoreCall>,
}

impl MemoryInner {
    /// Entnimmt einen geplanten Fehler für `op`, falls vorhanden.
    fn take_failure(&mut self, op: StoreOp) -> Option<StoreError> {
        if self.offline {
            return Some(StoreError::Unavailable("memory store is offline".to_string()));
        }
        let index = self.failures.iter().position(|(planned, _)| *planned == op)?;
        self.failures.remove(index).map(|(_, error)| error)
    }
}

/// Prozessinterner Dokumentenspeicher.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryInner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    /// Plant einen einmaligen Fehler für den nächsten Aufruf der Art `op`.
    pub fn fail_next(&self, op: StoreOp, error: StoreError) {
        if let Ok(mut inner) = self.lock() {
            inner.failures.push_back((op, error));
        }
    }

    /// Schaltet den Store offline (alle Aufrufe schlagen fehl) oder wieder online.
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut inner) = self.lock() {
            inner.offline = offline;
        }
    }

    /// Anzahl gespeicherter Dokumente.
    pub fn document_count(&self) -> usize {
        self.lock().map(|inner| inner.documents.len()).unwrap_or(0)
    }

    /// Gibt `true` zurück, wenn ein Dokument mit der ID existiert.
    pub fn contains(&self, doc_id: &str) -> bool {
        self.lock()
            .map(|inner| inner.documents.contains_key(doc_id))
            .unwrap_or(false)
    }

    /// Kopie eines gespeicherten Dokuments.
    pub fn document(&self, doc_id: &str) -> Option<MarkerDocument> {
        self.lock()
            .ok()
            .and_then(|inner| inner.documents.get(doc_id).cloned())
    }

    /// Alle bisherigen Aufrufe in Reihenfolge (auch fehlgeschlagene).
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().map(|inner| inner.calls.clone()).unwrap_or_default()
    }
}

impl MarkerStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn create(&self, document: &MarkerDocument) -> Result<String, StoreError> {
        let mut inner = self.lock()?;
        inner.calls.push(StoreCall::Create {
            id: document.id,
            location: document.location,
        });
        if let Some(error) = inner.take_failure(StoreOp::Create) {
            return Err(error);
        }

        inner.next_doc += 1;
        let doc_id = format!("mem{:06}", inner.next_doc);
        inner.documents.insert(doc_id.clone(), document.clone());
        Ok(doc_id)
    }

    fn update_location(&self, doc_id: &str, location: LatLng) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.calls.push(StoreCall::Update {
            doc_id: doc_id.to_string(),
            location,
        });
        if let Some(error) = inner.take_failure(StoreOp::Update) {
            return Err(error);
        }
        validate_doc_id(doc_id)?;

        match inner.documents.get_mut(doc_id) {
            Some(document) => {
                document.location = location;
                Ok(())
            }
            None => Err(StoreError::NotFound(doc_id.to_string())),
        }
    }

    fn delete(&self, doc_id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.calls.push(StoreCall::Delete {
            doc_id: doc_id.to_string(),
        });
        if let Some(error) = inner.take_failure(StoreOp::Delete) {
            return Err(error);
        }
        validate_doc_id(doc_id)?;

        inner.documents.remove(doc_id);
        Ok(())
    }

    fn batch_delete(&self, doc_ids: &[String]) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.calls.push(StoreCall::BatchDelete {
            doc_ids: doc_ids.to_vec(),
        });
        if let Some(error) = inner.take_failure(StoreOp::BatchDelete) {
            return Err(error);
        }
        if doc_ids.len() > MAX_BATCH_WRITES {
            return Err(StoreError::BatchTooLarge {
                count: doc_ids.len(),
                max: MAX_BATCH_WRITES,
            });
        }
        // Erst alles prüfen, dann löschen: atomar
        for doc_id in doc_ids {
            validate_doc_id(doc_id)?;
        }
        for doc_id in doc_ids {
            inner.documents.remove(doc_id);
        }
        Ok(())
    }
}
