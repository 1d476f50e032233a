//! Firestore-Anbindung über die REST-API v1.

pub mod codec;

use super::{validate_doc_id, MarkerStore, StoreError, MAX_BATCH_WRITES};
use crate::core::{LatLng, MarkerDocument};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Verbindungsdaten für ein Firestore-Projekt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirestoreConfig {
    /// Firebase-Projekt-ID
    pub project_id: String,
    /// Datenbank-Name
    pub database: String,
    /// Collection für Marker-Dokumente
    pub collection: String,
    /// Web-API-Key (optional, wird als `key`-Query-Parameter gesendet)
    pub api_key: Option<String>,
    /// Basis-URL der REST-API (überschreibbar für den Emulator)
    pub base_url: String,
    /// HTTP-Timeout pro Request in Sekunden
    pub request_timeout_secs: u64,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            database: "(default)".to_string(),
            collection: super::DEFAULT_COLLECTION.to_string(),
            api_key: None,
            base_url: "https://firestore.googleapis.com/v1".to_string(),
            request_timeout_secs: 15,
        }
    }
}

impl FirestoreConfig {
    /// Ressourcenname der Datenbank-Dokumentenwurzel.
    fn documents_root(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.project_id, self.database
        )
    }

    /// Vollständiger Ressourcenname eines Marker-Dokuments.
    pub fn document_name(&self, doc_id: &str) -> String {
        format!("{}/{}/{}", self.documents_root(), self.collection, doc_id)
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.documents_root(),
            self.collection
        )
    }

    fn document_url(&self, doc_id: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.document_name(doc_id)
        )
    }

    fn commit_url(&self) -> String {
        format!(
            "{}/{}:commit",
            self.base_url.trim_end_matches('/'),
            self.documents_root()
        )
    }
}

/// Marker-Store auf Basis von Firestore.
pub struct FirestoreStore {
    config: FirestoreConfig,
    client: Client,
}

impl FirestoreStore {
    /// Baut den HTTP-Client für die gegebene Konfiguration.
    pub fn new(config: FirestoreConfig) -> Result<Self, StoreError> {
        if config.project_id.trim().is_empty() {
            return Err(StoreError::Unavailable(
                "firestore project_id is not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Aktive Konfiguration.
    pub fn config(&self) -> &FirestoreConfig {
        &self.config
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => request.query(&[("key", key)]),
            _ => request,
        }
    }

    /// Sendet den Request und übersetzt Nicht-2xx-Antworten in `StoreError`.
    fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = self
            .with_key(request)
            .send()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(codec::decode_error(status.as_u16(), &body))
    }
}

impl MarkerStore for FirestoreStore {
    fn backend_name(&self) -> &'static str {
        "firestore"
    }

    fn create(&self, document: &MarkerDocument) -> Result<String, StoreError> {
        let request = self
            .client
            .post(self.config.collection_url())
            .json(&codec::encode_document(document));
        let body: serde_json::Value = self
            .send(request)?
            .json()
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        // Das Dokument existiert bereits: nur der Name ist zwingend
        let doc_id = codec::created_document_id(&body)?;
        match codec::decode_document(&body) {
            Ok((_, stored)) if stored.id != document.id => log::warn!(
                "Firestore hat Marker-ID {} statt {} zurückgegeben (Dokument {})",
                stored.id,
                document.id,
                doc_id
            ),
            Ok(_) => {}
            Err(e) => log::warn!("Antwort für Dokument {} unvollständig: {}", doc_id, e),
        }
        Ok(doc_id)
    }

    fn update_location(&self, doc_id: &str, location: LatLng) -> Result<(), StoreError> {
        validate_doc_id(doc_id)?;
        let request = self
            .client
            .patch(self.config.document_url(doc_id))
            .query(&[
                ("updateMask.fieldPaths", "location"),
                ("currentDocument.exists", "true"),
            ])
            .json(&codec::encode_location_patch(location));
        self.send(request)?;
        Ok(())
    }

    fn delete(&self, doc_id: &str) -> Result<(), StoreError> {
        validate_doc_id(doc_id)?;
        self.send(self.client.delete(self.config.document_url(doc_id)))?;
        Ok(())
    }

    fn batch_delete(&self, doc_ids: &[String]) -> Result<(), StoreError> {
        if doc_ids.len() > MAX_BATCH_WRITES {
            return Err(StoreError::BatchTooLarge {
                count: doc_ids.len(),
                max: MAX_BATCH_WRITES,
            });
        }

        let names = doc_ids
            .iter()
            .map(|doc_id| validate_doc_id(doc_id).map(|_| self.config.document_name(doc_id)))
            .collect::<Result<Vec<_>, _>>()?;

        let request = self
            .client
            .post(self.config.commit_url())
            .json(&codec::encode_batch_delete(&names));
        self.send(request)?;
        Ok(())
    }
}
