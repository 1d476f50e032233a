//! Scroll-Zoom auf Mausposition.

use super::{InputState, MapContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Scroll-Zoom; eine Raste pro Frame mit Scroll-Bewegung.
    pub(super) fn handle_scroll_zoom(&self, ctx: &MapContext, events: &mut Vec<AppIntent>) {
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 || !ctx.response.hovered() {
            return;
        }

        let notches = if scroll > 0.0 { 1.0 } else { -1.0 };
        let focus = ctx.response.hover_pos().map(|pos| ctx.local(pos));
        events.push(AppIntent::MapZoomed { notches, focus });
    }
}
