use crate::app::CommandLog;
use crate::core::MarkerList;
use crate::overlay::ClusterOverlay;
use crate::shared::AppOptions;

use super::{SelectionState, SyncQueue, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Lokale Marker in Erstellungsreihenfolge
    pub markers: MarkerList,
    /// Selection-State
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// Cluster-Overlay über der Karte
    pub overlay: ClusterOverlay,
    /// Outbox und laufende Remote-Requests
    pub sync: SyncQueue,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: AppOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
    overlay_dirty: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            markers: MarkerList::new(),
            selection: SelectionState::new(),
            view: ViewState::from_options(&options),
            overlay: ClusterOverlay::new(options.cluster_grid_px, options.cluster_max_zoom),
            sync: SyncQueue::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
            overlay_dirty: false,
        }
    }

    /// Gibt die Anzahl der Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Selektierter Marker, falls er noch existiert.
    pub fn selected_marker(&self) -> Option<&crate::core::Marker> {
        self.selection
            .selected_marker_id
            .and_then(|id| self.markers.get(id))
    }

    /// Markiert Marker-Liste oder Selektion als geändert.
    pub fn mark_overlay_dirty(&mut self) {
        self.overlay_dirty = true;
    }

    /// Liest und löscht das Dirty-Flag.
    pub fn take_overlay_dirty(&mut self) -> bool {
        std::mem::take(&mut self.overlay_dirty)
    }

    /// Baut das Overlay aus dem vollständigen Marker-Bestand neu auf.
    pub fn rebuild_overlay(&mut self) {
        self.overlay.rebuild(
            &self.markers,
            self.selection.selected_marker_id,
            &self.view.viewport,
        );
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
