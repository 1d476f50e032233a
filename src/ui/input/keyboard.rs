//! Keyboard-Shortcuts der Karte.

use crate::app::AppIntent;

/// Escape hebt die Selektion auf, Entf löscht den selektierten Marker.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    selected_marker_id: Option<u64>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if selected_marker_id.is_none() {
        return events;
    }

    let (escape, delete) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Delete),
        )
    });
    if escape {
        events.push(AppIntent::ClearSelectionRequested);
    }
    if delete {
        events.push(AppIntent::DeleteSelectedRequested);
    }
    events
}
