//! Handler für Kartenausschnitt und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LatLng;

/// Setzt die Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Karte.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::viewport::pan(state, delta);
}

/// Zoomt um einen Fokuspunkt.
pub fn zoom(state: &mut AppState, delta: f64, focus: Option<glam::Vec2>) {
    use_cases::viewport::zoom(state, delta, focus);
}

/// Zentriert auf einen Cluster und zoomt hinein.
pub fn focus_cluster(state: &mut AppState, center: LatLng, zoom_steps: f64) {
    use_cases::viewport::focus(state, center, zoom_steps);
}

/// Setzt die Ansicht zurück.
pub fn reset(state: &mut AppState) {
    use_cases::viewport::reset(state);
}
