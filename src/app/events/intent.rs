use crate::core::LatLng;
use crate::store::RemoteCompletion;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf eine freie Kartenstelle (neuer Marker)
    MapClicked { position: LatLng },
    /// Klick auf einen Marker
    MarkerClicked { marker_id: u64 },
    /// Drag eines Markers beendet
    MarkerDragEnded { marker_id: u64, position: LatLng },
    /// Klick auf einen Cluster mit mehreren Markern
    ClusterClicked { center: LatLng },
    /// Button "Delete Selected Marker"
    DeleteSelectedRequested,
    /// Button "Delete All Markers"
    DeleteAllRequested,
    /// Selektion aufheben (Escape)
    ClearSelectionRequested,
    /// Remote-Request abgeschlossen (vom Worker)
    RemoteCompleted { completion: RemoteCompletion },
    /// Größe der Kartenfläche hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte um ein Pixel-Delta verschieben
    MapPanned { delta: glam::Vec2 },
    /// Mausrad-Zoom in Rasten (positiv = hinein), optional um einen Fokuspunkt
    MapZoomed {
        notches: f64,
        focus: Option<glam::Vec2>,
    },
    /// Karte auf Start-Ansicht zurücksetzen
    ResetViewRequested,
    /// Anwendung beenden
    ExitRequested,
}
