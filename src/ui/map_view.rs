//! Kartenfläche: Kacheln, Cluster und Marker zeichnen, Input einsammeln.

mod tiles;

pub use tiles::{tile_url, visible_tiles, VisibleTile};

use super::input::{cluster_radius, InputState};
use crate::app::{AppIntent, AppState};
use crate::overlay::MarkerVisual;

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn to_pos(rect: egui::Rect, local: glam::Vec2) -> egui::Pos2 {
    rect.min + egui::vec2(local.x, local.y)
}

/// Rendert die Kartenfläche und liefert die Intents dieses Frames.
pub fn render_map(ui: &mut egui::Ui, state: &AppState, input: &mut InputState) -> Vec<AppIntent> {
    let height = state.options.map_height_px.min(ui.available_height()).max(1.0);
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::click_and_drag(),
    );

    let events = input.collect_map_events(
        ui,
        &response,
        &state.view.viewport,
        &state.overlay,
        state.selection.selected_marker_id,
        &state.options,
    );

    let mut map_ui = ui.new_child(egui::UiBuilder::new().max_rect(rect));
    map_ui.set_clip_rect(rect);
    paint_tiles(&map_ui, rect, state);
    paint_overlay(&map_ui, rect, state, input.drag_preview());

    events
}

fn paint_tiles(ui: &egui::Ui, rect: egui::Rect, state: &AppState) {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(225));

    let template = state.options.tile_url_template.trim();
    let grid_stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(200));

    for tile in visible_tiles(&state.view.viewport) {
        let tile_rect =
            egui::Rect::from_min_size(to_pos(rect, tile.min), egui::Vec2::splat(tile.size));
        if template.is_empty() {
            painter.rect_stroke(tile_rect, 0.0, grid_stroke, egui::StrokeKind::Inside);
        } else {
            egui::Image::from_uri(tile_url(template, &tile)).paint_at(ui, tile_rect);
        }
    }

    if !template.is_empty() {
        painter.text(
            rect.right_bottom() - egui::vec2(4.0, 2.0),
            egui::Align2::RIGHT_BOTTOM,
            "© OpenStreetMap contributors",
            egui::FontId::proportional(11.0),
            egui::Color32::from_gray(60),
        );
    }
}

fn paint_overlay(
    ui: &egui::Ui,
    rect: egui::Rect,
    state: &AppState,
    drag_preview: Option<(u64, egui::Pos2)>,
) {
    let painter = ui.painter();
    let viewport = &state.view.viewport;
    let options = &state.options;
    let outline = egui::Stroke::new(1.5, egui::Color32::WHITE);

    for cluster in state.overlay.clusters() {
        let visual = match cluster.marker_ids.as_slice() {
            [marker_id] => state.overlay.visual(*marker_id),
            _ => None,
        };

        let Some(visual) = visual else {
            let center = to_pos(rect, viewport.to_screen(cluster.center));
            let radius = cluster_radius(options.marker_radius_px, cluster.len());
            painter.circle(center, radius, color32(options.cluster_color), outline);
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                cluster.len().to_string(),
                egui::FontId::proportional(13.0),
                egui::Color32::WHITE,
            );
            continue;
        };

        let center = match drag_preview {
            Some((marker_id, pos)) if marker_id == visual.marker_id => pos,
            _ => to_pos(rect, viewport.to_screen(visual.position)),
        };
        paint_marker(painter, center, visual, state);
    }
}

fn paint_marker(
    painter: &egui::Painter,
    center: egui::Pos2,
    visual: &MarkerVisual,
    state: &AppState,
) {
    let options = &state.options;
    let fill = if visual.selected {
        options.marker_color_selected
    } else if visual.pending {
        options.marker_color_pending
    } else {
        options.marker_color
    };
    let stroke = if visual.draggable {
        egui::Stroke::new(2.5, egui::Color32::BLACK)
    } else {
        egui::Stroke::new(1.5, egui::Color32::WHITE)
    };

    painter.circle(center, options.marker_radius_px, color32(fill), stroke);
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        &visual.label,
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
}
