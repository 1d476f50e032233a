//! Grid-Clustering im projizierten Pixelraum.

use super::MarkerVisual;
use crate::core::{project, unproject, LatLng};
use glam::DVec2;
use std::collections::HashMap;

/// Gruppe von Marker-Visuals, die in dieselbe Grid-Zelle fallen.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Schwerpunkt der enthaltenen Marker
    pub center: LatLng,
    /// Marker-IDs in Erstellungsreihenfolge
    pub marker_ids: Vec<u64>,
}

impl Cluster {
    /// Gibt `true` zurück, wenn der Cluster nur einen Marker enthält.
    pub fn is_single(&self) -> bool {
        self.marker_ids.len() == 1
    }

    /// Anzahl enthaltener Marker.
    pub fn len(&self) -> usize {
        self.marker_ids.len()
    }

    /// Gibt `true` zurück, wenn der Cluster leer ist.
    pub fn is_empty(&self) -> bool {
        self.marker_ids.is_empty()
    }
}

/// Gruppiert Visuals in Zellen von `grid_px` Pixeln beim gegebenen Zoom.
///
/// Ab `max_zoom` wird nicht mehr gruppiert: jeder Marker bildet einen eigenen
/// Cluster. Die Reihenfolge der Cluster folgt dem ersten Marker jeder Zelle.
pub fn grid_clusters<'a>(
    visuals: impl IntoIterator<Item = &'a MarkerVisual>,
    zoom: f64,
    grid_px: f32,
    max_zoom: f64,
) -> Vec<Cluster> {
    let grid = grid_px.max(1.0) as f64;
    let clustering = zoom < max_zoom;

    let mut cells: HashMap<(i64, i64), usize> = HashMap::new();
    let mut buckets: Vec<(Vec<u64>, DVec2)> = Vec::new();

    for visual in visuals {
        let world = project(visual.position, zoom);
        let slot = if clustering {
            let cell = (
                (world.x / grid).floor() as i64,
                (world.y / grid).floor() as i64,
            );
            *cells.entry(cell).or_insert_with(|| {
                buckets.push((Vec::new(), DVec2::ZERO));
                buckets.len() - 1
            })
        } else {
            buckets.push((Vec::new(), DVec2::ZERO));
            buckets.len() - 1
        };

        let (ids, sum) = &mut buckets[slot];
        ids.push(visual.marker_id);
        *sum += world;
    }

    buckets
        .into_iter()
        .map(|(marker_ids, sum)| {
            let mean = sum / marker_ids.len() as f64;
            Cluster {
                center: unproject(mean, zoom),
                marker_ids,
            }
        })
        .collect()
}
