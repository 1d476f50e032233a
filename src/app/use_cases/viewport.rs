//! Use-Case-Funktionen für den Kartenausschnitt.
//!
//! Ansichtsänderungen clustern das Overlay nur neu und zählen nicht als Rebuild.

use crate::app::{AppState, ViewState};
use crate::core::LatLng;
use glam::Vec2;

/// Aktualisiert die Größe der Kartenfläche.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    let size = Vec2::from(size);
    if state.view.viewport.size == size {
        return;
    }
    state.view.viewport.size = size;
    state.overlay.recluster(&state.view.viewport);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.viewport.pan_pixels(delta);
}

/// Ändert den Zoom um `delta` Stufen, optional um einen Screen-Fokuspunkt.
pub fn zoom(state: &mut AppState, delta: f64, focus: Option<Vec2>) {
    state.view.viewport.zoom_by(delta, focus);
    state.overlay.recluster(&state.view.viewport);
}

/// Zentriert auf eine Koordinate und zoomt hinein (Cluster-Klick).
pub fn focus(state: &mut AppState, center: LatLng, zoom_steps: f64) {
    state.view.viewport.focus_on(center, zoom_steps);
    state.overlay.recluster(&state.view.viewport);
}

/// Stellt Mittelpunkt und Zoom aus den Optionen wieder her.
pub fn reset(state: &mut AppState) {
    let size = state.view.viewport.size;
    state.view.viewport = ViewState::initial_viewport(&state.options, size);
    state.overlay.recluster(&state.view.viewport);
}
