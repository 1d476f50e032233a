//! Slippy-Map-Kacheln: sichtbarer Bereich und URL-Vorlage.

use crate::core::{project, MapViewport, TILE_SIZE};
use glam::{DVec2, Vec2};

/// Höchste Kachel-Zoomstufe der üblichen Tile-Server.
const MAX_TILE_ZOOM: f64 = 19.0;
/// Obergrenze sichtbarer Kacheln pro Frame.
const MAX_VISIBLE_TILES: usize = 256;

/// Eine sichtbare Kachel mit Platzierung relativ zur Kartenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTile {
    /// Kachel-Zoom
    pub z: u32,
    /// Spalte (bereits auf [0, 2^z) umgebrochen)
    pub x: i64,
    /// Zeile
    pub y: i64,
    /// Linke obere Ecke in Pixeln relativ zur Kartenfläche
    pub min: Vec2,
    /// Kantenlänge in Pixeln
    pub size: f32,
}

/// Berechnet alle Kacheln, die den Viewport überdecken.
///
/// Bei gebrochenem Zoom werden die Kacheln der nächsten ganzen Stufe skaliert.
pub fn visible_tiles(viewport: &MapViewport) -> Vec<VisibleTile> {
    let z = viewport.zoom.round().clamp(0.0, MAX_TILE_ZOOM);
    let scale = 2f64.powf(viewport.zoom - z);
    let center = project(viewport.center, z);
    let half = DVec2::new(viewport.size.x as f64, viewport.size.y as f64) * 0.5 / scale;
    let (min, max) = (center - half, center + half);

    let count = 1i64 << (z as u32);
    // Obergrenze exklusiv: eine Kante genau auf der Kachelgrenze zählt nicht
    let first = |v: f64| (v / TILE_SIZE).floor() as i64;
    let last = |v: f64| (v / TILE_SIZE).ceil() as i64 - 1;
    let x_range = first(min.x)..=last(max.x);
    let y_range = first(min.y).max(0)..=last(max.y).min(count - 1);

    let size = (TILE_SIZE * scale) as f32;
    let mut tiles = Vec::new();
    for y in y_range {
        for x in x_range.clone() {
            if tiles.len() >= MAX_VISIBLE_TILES {
                return tiles;
            }
            let origin = (DVec2::new(x as f64, y as f64) * TILE_SIZE - center) * scale;
            tiles.push(VisibleTile {
                z: z as u32,
                x: x.rem_euclid(count),
                y,
                min: Vec2::new(origin.x as f32, origin.y as f32) + viewport.size * 0.5,
                size,
            });
        }
    }
    tiles
}

/// Setzt `{z}`, `{x}` und `{y}` in die URL-Vorlage ein.
pub fn tile_url(template: &str, tile: &VisibleTile) -> String {
    template
        .replace("{z}", &tile.z.to_string())
        .replace("{x}", &tile.x.to_string())
        .replace("{y}", &tile.y.to_string())
}
