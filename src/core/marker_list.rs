//! Geordnete Marker-Liste mit monotoner ID-Vergabe.

use super::{LatLng, Marker};
use indexmap::IndexMap;

/// Container für alle lokalen Marker in Erstellungsreihenfolge.
#[derive(Debug, Clone)]
pub struct MarkerList {
    markers: IndexMap<u64, Marker>,
    /// Nächste zu vergebende ID; wird nie zurückgesetzt, auch nicht nach Löschungen
    next_id: u64,
}

impl MarkerList {
    /// Erstellt eine leere Liste (erste ID = 1).
    pub fn new() -> Self {
        Self {
            markers: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Legt einen neuen Marker an und gibt dessen ID zurück.
    pub fn create(&mut self, position: LatLng) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.markers.insert(id, Marker::new(id, position));
        id
    }

    /// Fügt einen bestehenden Marker ein (z.B. aus Tests); hält den ID-Zähler konsistent.
    pub fn insert(&mut self, marker: Marker) {
        self.next_id = self.next_id.max(marker.id + 1);
        self.markers.insert(marker.id, marker);
    }

    /// Marker per ID.
    pub fn get(&self, id: u64) -> Option<&Marker> {
        self.markers.get(&id)
    }

    /// Mutable Marker per ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Marker> {
        self.markers.get_mut(&id)
    }

    /// Gibt `true` zurück, wenn ein Marker mit der ID existiert.
    pub fn contains(&self, id: u64) -> bool {
        self.markers.contains_key(&id)
    }

    /// Entfernt einen Marker; die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove(&mut self, id: u64) -> Option<Marker> {
        self.markers.shift_remove(&id)
    }

    /// Entfernt alle Marker. Der ID-Zähler läuft weiter.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Anzahl der Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iteriert in Erstellungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Mutabler Iterator in Erstellungsreihenfolge.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Marker> {
        self.markers.values_mut()
    }

    /// IDs in Erstellungsreihenfolge.
    pub fn ids(&self) -> Vec<u64> {
        self.markers.keys().copied().collect()
    }

    /// Anzahl der Marker mit offenem Create.
    pub fn pending_count(&self) -> usize {
        self.markers.values().filter(|m| m.is_pending()).count()
    }

    /// Anzahl der Marker mit fehlgeschlagenem Create.
    pub fn failed_count(&self) -> usize {
        self.markers.values().filter(|m| m.is_failed()).count()
    }

    /// Nächste ID, die [`MarkerList::create`] vergeben würde.
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for MarkerList {
    fn default() -> Self {
        Self::new()
    }
}
