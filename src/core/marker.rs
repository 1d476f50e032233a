//! Lokaler Marker mit Synchronisationsstatus gegenüber dem Remote-Store.

use super::LatLng;

/// Persistenzstatus eines Markers im Remote-Store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncStatus {
    /// Create-Request läuft noch, es existiert (noch) kein Dokument
    #[default]
    Pending,
    /// Dokument existiert im Remote-Store
    Persisted {
        /// Vom Store vergebene Dokument-ID
        doc_id: String,
    },
    /// Create ist fehlgeschlagen, es gibt kein Dokument
    Failed {
        /// Fehlermeldung des Stores
        reason: String,
    },
}

/// Ein auf der Karte platzierter Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Lokale, monoton vergebene ID (Label auf der Karte)
    pub id: u64,
    /// Position (None = unbekannt)
    pub position: Option<LatLng>,
    /// Status gegenüber dem Remote-Store
    pub sync: SyncStatus,
    /// Position wurde verschoben, während der Create noch lief
    pub location_dirty: bool,
    /// Löschen wurde angefordert, während der Create noch lief
    pub delete_requested: bool,
}

impl Marker {
    /// Erstellt einen neuen, noch nicht persistierten Marker.
    pub fn new(id: u64, position: LatLng) -> Self {
        Self {
            id,
            position: Some(position),
            sync: SyncStatus::Pending,
            location_dirty: false,
            delete_requested: false,
        }
    }

    /// Dokument-ID im Remote-Store, falls persistiert.
    pub fn remote_id(&self) -> Option<&str> {
        match &self.sync {
            SyncStatus::Persisted { doc_id } => Some(doc_id.as_str()),
            _ => None,
        }
    }

    /// Gibt `true` zurück, solange der Create-Request offen ist.
    pub fn is_pending(&self) -> bool {
        matches!(self.sync, SyncStatus::Pending)
    }

    /// Gibt `true` zurück, wenn der Create-Request fehlgeschlagen ist.
    pub fn is_failed(&self) -> bool {
        matches!(self.sync, SyncStatus::Failed { .. })
    }

    /// Label für die Kartendarstellung.
    pub fn label(&self) -> String {
        self.id.to_string()
    }
}
