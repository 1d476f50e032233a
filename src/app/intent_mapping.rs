//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::options::CLUSTER_CLICK_ZOOM_STEPS;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapClicked { position } => {
            if position.is_valid() {
                vec![AppCommand::CreateMarker { position }]
            } else {
                log::warn!("Klick außerhalb gültiger Koordinaten ignoriert: {}", position);
                vec![]
            }
        }
        AppIntent::MarkerClicked { marker_id } => vec![AppCommand::SelectMarker { marker_id }],
        AppIntent::MarkerDragEnded {
            marker_id,
            position,
        } => {
            // Nur der selektierte Marker ist ziehbar
            if state.selection.is_selected(marker_id) && position.is_valid() {
                vec![AppCommand::RepositionMarker {
                    marker_id,
                    position,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::ClusterClicked { center } => vec![AppCommand::FocusCluster {
            center,
            zoom_steps: CLUSTER_CLICK_ZOOM_STEPS,
        }],
        AppIntent::DeleteSelectedRequested => {
            if state.selection.selected_marker_id.is_some() {
                vec![AppCommand::DeleteSelectedMarker]
            } else {
                vec![]
            }
        }
        AppIntent::DeleteAllRequested => vec![AppCommand::DeleteAllMarkers],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::RemoteCompleted { completion } => {
            vec![AppCommand::ApplyRemoteCompletion { completion }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::MapPanned { delta } => vec![AppCommand::PanMap { delta }],
        AppIntent::MapZoomed { notches, focus } => vec![AppCommand::ZoomMap {
            delta: notches * state.options.map_scroll_zoom_step,
            focus,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
