//! Karten-Input-Handling: Klicks, Marker-Drag, Pan und Scroll → AppIntent.

mod clicks;
mod drag;
mod keyboard;
mod pick;
mod zoom;

pub use pick::{cluster_radius, pick, MapHit};

use crate::app::AppIntent;
use crate::core::MapViewport;
use crate::overlay::ClusterOverlay;
use crate::shared::AppOptions;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum PrimaryDragMode {
    #[default]
    None,
    /// Der selektierte Marker wird gezogen
    MarkerDrag { marker_id: u64 },
    MapPan,
}

/// Bündelt die gemeinsamen Parameter für die Event-Verarbeitung der Karte.
struct MapContext<'a> {
    ui: &'a egui::Ui,
    response: &'a egui::Response,
    viewport: &'a MapViewport,
    overlay: &'a ClusterOverlay,
    selected_marker_id: Option<u64>,
    options: &'a AppOptions,
}

impl MapContext<'_> {
    /// Absolute Screen-Position → Position relativ zur Kartenfläche.
    fn local(&self, pos: egui::Pos2) -> glam::Vec2 {
        let local = pos - self.response.rect.min;
        glam::Vec2::new(local.x, local.y)
    }

    /// Trefferprüfung an einer absoluten Screen-Position.
    fn pick_at(&self, pos: egui::Pos2) -> Option<MapHit> {
        pick(
            self.overlay,
            self.viewport,
            self.local(pos),
            self.options.marker_radius_px,
        )
    }
}

/// Verwaltet den Input-Zustand der Karte (Drag, Vorschau)
#[derive(Default)]
pub struct InputState {
    primary_drag_mode: PrimaryDragMode,
    drag_preview: Option<(u64, egui::Pos2)>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker, der gerade gezogen wird, mit aktueller Screen-Position.
    pub fn drag_preview(&self) -> Option<(u64, egui::Pos2)> {
        self.drag_preview
    }

    /// Sammelt Karten-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_map_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport: &MapViewport,
        overlay: &ClusterOverlay,
        selected_marker_id: Option<u64>,
        options: &AppOptions,
    ) -> Vec<AppIntent> {
        let ctx = MapContext {
            ui,
            response,
            viewport,
            overlay,
            selected_marker_id,
            options,
        };

        let mut events = vec![AppIntent::ViewportResized {
            size: [response.rect.width(), response.rect.height()],
        }];

        events.extend(keyboard::collect_keyboard_intents(ui, selected_marker_id));

        self.handle_drag_start(&ctx);
        self.handle_drag_update(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}
