//! Klick-Events: Marker selektieren, Cluster aufzoomen, Marker anlegen.

use super::{InputState, MapContext, MapHit, PrimaryDragMode};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Primärklicks auf der Karte.
    pub(super) fn handle_clicks(&mut self, ctx: &MapContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            return;
        };

        let intent = match ctx.pick_at(pointer_pos) {
            Some(MapHit::Marker(marker_id)) => AppIntent::MarkerClicked { marker_id },
            Some(MapHit::Cluster(center)) => AppIntent::ClusterClicked { center },
            None => AppIntent::MapClicked {
                position: ctx.viewport.from_screen(ctx.local(pointer_pos)),
            },
        };
        events.push(intent);
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
