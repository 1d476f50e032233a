use crate::core::LatLng;
use crate::store::RemoteCompletion;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Marker anlegen und Create-Request einreihen
    CreateMarker { position: LatLng },
    /// Marker selektieren
    SelectMarker { marker_id: u64 },
    /// Selektion aufheben
    ClearSelection,
    /// Marker verschieben und Update-Request einreihen
    RepositionMarker { marker_id: u64, position: LatLng },
    /// Selektierten Marker löschen (lokal erst nach Remote-Erfolg)
    DeleteSelectedMarker,
    /// Alle Marker per atomarem Batch löschen
    DeleteAllMarkers,
    /// Ergebnis eines Remote-Requests übernehmen
    ApplyRemoteCompletion { completion: RemoteCompletion },
    /// Größe der Kartenfläche setzen
    SetViewportSize { size: [f32; 2] },
    /// Karte verschieben
    PanMap { delta: glam::Vec2 },
    /// Zoom ändern (in Zoomstufen)
    ZoomMap {
        delta: f64,
        focus: Option<glam::Vec2>,
    },
    /// Auf einen Cluster zentrieren und hineinzoomen
    FocusCluster { center: LatLng, zoom_steps: f64 },
    /// Start-Ansicht wiederherstellen
    ResetView,
    /// Anwendung beenden
    RequestExit,
}
