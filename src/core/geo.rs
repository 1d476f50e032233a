//! Geografische Koordinaten und Web-Mercator-Viewport.

use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Kantenlänge einer Slippy-Map-Kachel in Pixeln.
pub const TILE_SIZE: f64 = 256.0;
/// Maximale Breite, die Web-Mercator noch abbilden kann.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Geografische Koordinate in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine neue Koordinate.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Gibt `true` zurück, wenn beide Werte endlich und im gültigen Bereich liegen.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Projiziert eine Koordinate in Welt-Pixel bei gegebenem Zoom.
pub fn project(pos: LatLng, zoom: f64) -> DVec2 {
    let scale = TILE_SIZE * 2f64.powf(zoom);
    let lat = pos.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
    let siny = lat.to_radians().sin();
    let x = (pos.lng + 180.0) / 360.0 * scale;
    let y = (0.5 - ((1.0 + siny) / (1.0 - siny)).ln() / (4.0 * std::f64::consts::PI)) * scale;
    DVec2::new(x, y)
}

/// Umkehrung von [`project`]: Welt-Pixel → Koordinate.
pub fn unproject(world: DVec2, zoom: f64) -> LatLng {
    let scale = TILE_SIZE * 2f64.powf(zoom);
    let lng = world.x / scale * 360.0 - 180.0;
    let n = std::f64::consts::PI - 2.0 * std::f64::consts::PI * world.y / scale;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

/// Explizit besessenes Karten-Handle: Zentrum, Zoom und Pixelgröße der Kartenfläche.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewport {
    /// Kartenmittelpunkt
    pub center: LatLng,
    /// Zoom-Stufe (Slippy-Map-Konvention, darf gebrochen sein)
    pub zoom: f64,
    /// Größe der Kartenfläche in Pixeln
    pub size: Vec2,
    /// Minimal erlaubter Zoom
    pub min_zoom: f64,
    /// Maximal erlaubter Zoom
    pub max_zoom: f64,
}

impl MapViewport {
    /// Erstellt einen Viewport mit Standard-Zoomgrenzen (2..=20).
    pub fn new(center: LatLng, zoom: f64, size: Vec2) -> Self {
        Self {
            center,
            zoom: zoom.clamp(2.0, 20.0),
            size,
            min_zoom: 2.0,
            max_zoom: 20.0,
        }
    }

    /// Setzt neue Zoomgrenzen und klemmt den aktuellen Zoom.
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = max_zoom.max(min_zoom);
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        self
    }

    /// Welt-Pixel des Kartenmittelpunkts beim aktuellen Zoom.
    pub fn center_world(&self) -> DVec2 {
        project(self.center, self.zoom)
    }

    /// Koordinate → Screen-Position relativ zur linken oberen Ecke der Kartenfläche.
    pub fn to_screen(&self, pos: LatLng) -> Vec2 {
        let offset = project(pos, self.zoom) - self.center_world();
        Vec2::new(offset.x as f32, offset.y as f32) + self.size * 0.5
    }

    /// Screen-Position (relativ zur Kartenfläche) → Koordinate.
    pub fn from_screen(&self, screen: Vec2) -> LatLng {
        let offset = screen - self.size * 0.5;
        let world = self.center_world() + DVec2::new(offset.x as f64, offset.y as f64);
        unproject(world, self.zoom)
    }

    /// Verschiebt die Karte um ein Pixel-Delta (Inhalt folgt dem Zeiger).
    pub fn pan_pixels(&mut self, delta: Vec2) {
        let world = self.center_world() - DVec2::new(delta.x as f64, delta.y as f64);
        let mut center = unproject(world, self.zoom);
        center.lat = center.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
        center.lng = wrap_lng(center.lng);
        self.center = center;
    }

    /// Ändert den Zoom um `delta`; der Fokuspunkt bleibt an seiner Screen-Position.
    pub fn zoom_by(&mut self, delta: f64, focus: Option<Vec2>) {
        let new_zoom = (self.zoom + delta).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        let Some(focus) = focus else {
            self.zoom = new_zoom;
            return;
        };

        let anchor = self.from_screen(focus);
        self.zoom = new_zoom;
        let drift = self.to_screen(anchor) - focus;
        self.pan_pixels(-drift);
    }

    /// Zentriert die Karte auf eine Koordinate und zoomt um `delta` hinein.
    pub fn focus_on(&mut self, pos: LatLng, delta: f64) {
        self.center = pos;
        self.zoom = (self.zoom + delta).clamp(self.min_zoom, self.max_zoom);
    }
}

/// Normalisiert einen Längengrad auf [-180, 180].
fn wrap_lng(lng: f64) -> f64 {
    let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lng > 0.0 {
        180.0
    } else {
        wrapped
    }
}
