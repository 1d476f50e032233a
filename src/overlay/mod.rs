//! Cluster-Overlay: Marker-Visuals und deren Gruppierung bei kleinem Zoom.
//!
//! Das Overlay wird nach jeder Änderung der Marker-Liste oder der Selektion
//! genau einmal aus dem vollständigen Marker-Bestand neu aufgebaut. Der Aufbau
//! liefert zusätzlich einen nach Marker-ID geschlüsselten Diff gegenüber dem
//! vorherigen Stand.

pub mod cluster;

pub use cluster::{grid_clusters, Cluster};

use crate::core::{LatLng, MapViewport, MarkerList};
use indexmap::IndexMap;

/// Darstellungsdaten eines einzelnen Markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerVisual {
    /// ID des zugehörigen Markers (Ziel für Klick- und Drag-Ende-Events)
    pub marker_id: u64,
    /// Position auf der Karte
    pub position: LatLng,
    /// Beschriftung
    pub label: String,
    /// Nur der selektierte Marker ist ziehbar
    pub draggable: bool,
    /// Hervorhebung
    pub selected: bool,
    /// Create-Request noch offen
    pub pending: bool,
}

/// Änderungen eines Rebuilds gegenüber dem vorherigen Stand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayDiff {
    /// Neu hinzugekommene Marker
    pub added: Vec<u64>,
    /// Entfernte Marker
    pub removed: Vec<u64>,
    /// Marker mit geänderter Position, Beschriftung oder Ziehbarkeit
    pub updated: Vec<u64>,
}

impl OverlayDiff {
    /// Gibt `true` zurück, wenn sich nichts geändert hat.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

/// Verwaltetes Overlay über der Kartenfläche.
#[derive(Debug, Clone)]
pub struct ClusterOverlay {
    visuals: IndexMap<u64, MarkerVisual>,
    clusters: Vec<Cluster>,
    grid_px: f32,
    max_zoom: f64,
    rebuild_count: u64,
    last_diff: OverlayDiff,
}

impl ClusterOverlay {
    /// Erstellt ein leeres Overlay mit Grid-Größe und Zoom-Grenze fürs Clustering.
    pub fn new(grid_px: f32, max_zoom: f64) -> Self {
        Self {
            visuals: IndexMap::new(),
            clusters: Vec::new(),
            grid_px,
            max_zoom,
            rebuild_count: 0,
            last_diff: OverlayDiff::default(),
        }
    }

    /// Entfernt alle verwalteten Visuals und Cluster.
    pub fn clear_visuals(&mut self) {
        self.visuals.clear();
        self.clusters.clear();
    }

    /// Baut das Overlay aus dem aktuellen Marker-Bestand und der Selektion neu auf.
    pub fn rebuild(
        &mut self,
        markers: &MarkerList,
        selected: Option<u64>,
        viewport: &MapViewport,
    ) -> &OverlayDiff {
        let fresh: IndexMap<u64, MarkerVisual> = markers
            .iter()
            .filter_map(|marker| {
                let position = marker.position?;
                let is_selected = selected == Some(marker.id);
                Some((
                    marker.id,
                    MarkerVisual {
                        marker_id: marker.id,
                        position,
                        label: marker.label(),
                        draggable: is_selected,
                        selected: is_selected,
                        pending: marker.is_pending(),
                    },
                ))
            })
            .collect();

        let mut diff = OverlayDiff::default();
        for (id, visual) in &fresh {
            match self.visuals.get(id) {
                None => diff.added.push(*id),
                Some(previous) if previous != visual => diff.updated.push(*id),
                Some(_) => {}
            }
        }
        diff.removed = self
            .visuals
            .keys()
            .filter(|id| !fresh.contains_key(*id))
            .copied()
            .collect();

        self.clear_visuals();
        self.visuals = fresh;
        self.recluster(viewport);

        self.rebuild_count += 1;
        log::debug!(
            "Overlay neu aufgebaut: {} Visuals, {} Cluster (+{} -{} ~{})",
            self.visuals.len(),
            self.clusters.len(),
            diff.added.len(),
            diff.removed.len(),
            diff.updated.len()
        );
        self.last_diff = diff;
        &self.last_diff
    }

    /// Berechnet nur die Cluster neu (z.B. nach Zoom), ohne Rebuild.
    pub fn recluster(&mut self, viewport: &MapViewport) {
        self.clusters = grid_clusters(
            self.visuals.values(),
            viewport.zoom,
            self.grid_px,
            self.max_zoom,
        );
    }

    /// Alle Visuals in Erstellungsreihenfolge.
    pub fn visuals(&self) -> impl Iterator<Item = &MarkerVisual> {
        self.visuals.values()
    }

    /// Visual eines Markers.
    pub fn visual(&self, marker_id: u64) -> Option<&MarkerVisual> {
        self.visuals.get(&marker_id)
    }

    /// Aktuelle Cluster.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Anzahl verwalteter Visuals.
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    /// Gibt `true` zurück, wenn keine Visuals verwaltet werden.
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    /// Anzahl bisheriger Rebuilds.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Diff des letzten Rebuilds.
    pub fn last_diff(&self) -> &OverlayDiff {
        &self.last_diff
    }
}
