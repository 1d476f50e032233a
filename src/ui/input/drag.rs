//! Drag-Lifecycle: Ziehen des selektierten Markers oder Karten-Pan.

use super::{InputState, MapContext, MapHit, PrimaryDragMode};
use crate::app::AppIntent;

impl InputState {
    /// Entscheidet beim Drag-Start zwischen Marker-Drag und Pan.
    pub(super) fn handle_drag_start(&mut self, ctx: &MapContext) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() ist die exakte Klickposition vor der Drag-Schwelle
        let press_pos = ctx.ui.input(|i| i.pointer.press_origin());
        let hit = press_pos.and_then(|pos| ctx.pick_at(pos));

        self.primary_drag_mode = match hit {
            Some(MapHit::Marker(marker_id)) if ctx.selected_marker_id == Some(marker_id) => {
                PrimaryDragMode::MarkerDrag { marker_id }
            }
            _ => PrimaryDragMode::MapPan,
        };
    }

    /// Aktualisiert Vorschau bzw. sendet Pan-Deltas.
    pub(super) fn handle_drag_update(&mut self, ctx: &MapContext, events: &mut Vec<AppIntent>) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::MarkerDrag { marker_id } => {
                    if let Some(pos) = ctx.response.interact_pointer_pos() {
                        self.drag_preview = Some((marker_id, pos));
                    }
                }
                PrimaryDragMode::MapPan | PrimaryDragMode::None => {
                    if pointer_delta != egui::Vec2::ZERO {
                        events.push(AppIntent::MapPanned {
                            delta: glam::Vec2::new(pointer_delta.x, pointer_delta.y),
                        });
                    }
                }
            }
        } else if (ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary))
            && pointer_delta != egui::Vec2::ZERO
        {
            events.push(AppIntent::MapPanned {
                delta: glam::Vec2::new(pointer_delta.x, pointer_delta.y),
            });
        }
    }

    /// Schließt einen Marker-Drag mit der Zielkoordinate ab.
    pub(super) fn handle_drag_end(&mut self, ctx: &MapContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if let PrimaryDragMode::MarkerDrag { marker_id } = self.primary_drag_mode {
            let end_pos = ctx
                .response
                .interact_pointer_pos()
                .or(self.drag_preview.map(|(_, pos)| pos));
            if let Some(pos) = end_pos {
                events.push(AppIntent::MarkerDragEnded {
                    marker_id,
                    position: ctx.viewport.from_screen(ctx.local(pos)),
                });
            }
        }

        self.primary_drag_mode = PrimaryDragMode::None;
        self.drag_preview = None;
    }
}
