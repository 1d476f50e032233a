//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, backend_name: &str) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Markers: {} | Pending: {} | Failed: {}",
                state.marker_count(),
                state.markers.pending_count(),
                state.markers.failed_count()
            ));

            ui.separator();

            match state.selected_marker() {
                Some(marker) => {
                    let position = marker
                        .position
                        .map_or_else(|| "unknown".to_string(), |p| p.to_string());
                    ui.label(format!("Selected: {} {}", marker.label(), position));
                }
                None => {
                    ui.label("Selected: none");
                }
            }

            ui.separator();

            let viewport = &state.view.viewport;
            ui.label(format!(
                "Zoom: {:.1} | Center: {}",
                viewport.zoom, viewport.center
            ));

            ui.separator();

            ui.label(format!(
                "Store: {} ({} in flight)",
                backend_name,
                state.sync.in_flight_count()
            ));

            ui.separator();

            ui.label(format!("Commands: {}", state.command_log.total()));

            if state.sync.failed_requests() > 0 {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "⚠ {} failed requests",
                        state.sync.failed_requests()
                    ))
                    .color(egui::Color32::YELLOW),
                );
            }
        });
    });
}
