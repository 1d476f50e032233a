//! Bedienleiste über der Karte.

use crate::app::{AppIntent, AppState};

/// Rendert die beiden Lösch-Buttons und gibt erzeugte Events zurück.
pub fn render_controls(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Delete All Markers").clicked() {
                events.push(AppIntent::DeleteAllRequested);
            }

            let has_selection = state.selection.selected_marker_id.is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("Delete Selected Marker"))
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested);
            }

            ui.separator();

            if ui.button("Reset View").clicked() {
                events.push(AppIntent::ResetViewRequested);
            }
        });
    });

    events
}
