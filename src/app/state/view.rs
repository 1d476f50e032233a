use crate::core::MapViewport;
use crate::shared::AppOptions;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Sichtbarer Kartenausschnitt
    pub viewport: MapViewport,
}

impl ViewState {
    /// Erstellt den Start-Ausschnitt aus den Optionen.
    pub fn from_options(options: &AppOptions) -> Self {
        Self {
            viewport: Self::initial_viewport(options, Vec2::ZERO),
        }
    }

    /// Start-Ausschnitt mit gegebener Flächengröße.
    pub fn initial_viewport(options: &AppOptions, size: Vec2) -> MapViewport {
        MapViewport::new(options.map_center, options.map_zoom, size)
            .with_zoom_limits(options.map_zoom_min, options.map_zoom_max)
    }
}
