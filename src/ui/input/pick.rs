//! Trefferprüfung für Marker und Cluster in Screen-Koordinaten.

use crate::core::{LatLng, MapViewport};
use crate::overlay::ClusterOverlay;
use glam::Vec2;

/// Getroffenes Overlay-Element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapHit {
    /// Einzelner Marker
    Marker(u64),
    /// Cluster mit mehreren Markern (Schwerpunkt)
    Cluster(LatLng),
}

/// Radius eines Cluster-Kreises in Pixeln, wächst logarithmisch mit der Größe.
pub fn cluster_radius(marker_radius: f32, len: usize) -> f32 {
    marker_radius + 4.0 + (len.max(1) as f32).log2() * 3.0
}

/// Sucht das nächstgelegene Element unter `screen` (relativ zur Kartenfläche).
///
/// Bei gleicher Distanz gewinnt das zuletzt gezeichnete Element.
pub fn pick(
    overlay: &ClusterOverlay,
    viewport: &MapViewport,
    screen: Vec2,
    marker_radius: f32,
) -> Option<MapHit> {
    let mut best: Option<(f32, MapHit)> = None;

    for cluster in overlay.clusters() {
        let (position, radius, hit) = match cluster.marker_ids.as_slice() {
            [marker_id] => {
                let position = overlay
                    .visual(*marker_id)
                    .map_or(cluster.center, |v| v.position);
                (position, marker_radius, MapHit::Marker(*marker_id))
            }
            ids => (
                cluster.center,
                cluster_radius(marker_radius, ids.len()),
                MapHit::Cluster(cluster.center),
            ),
        };

        let distance = viewport.to_screen(position).distance(screen);
        if distance <= radius && best.is_none_or(|(d, _)| distance <= d) {
            best = Some((distance, hit));
        }
    }

    best.map(|(_, hit)| hit)
}
