//! Dokumentform eines Markers im Remote-Store.

use super::LatLng;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload eines Marker-Dokuments: `{id, location: {lat, lng}, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDocument {
    /// Lokale Marker-ID zum Erstellungszeitpunkt
    pub id: u64,
    /// Position des Markers
    pub location: LatLng,
    /// Erstellungszeitpunkt
    pub timestamp: DateTime<Utc>,
}

impl MarkerDocument {
    /// Erstellt ein Dokument mit aktuellem Zeitstempel.
    pub fn now(id: u64, location: LatLng) -> Self {
        Self {
            id,
            location,
            timestamp: Utc::now(),
        }
    }
}
