//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::store::{execute, MarkerStore, RemoteWorker};

/// Orchestriert UI-Events, Use-Cases und den Austausch mit dem Remote-Worker.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Hat einer der Commands Marker-Liste oder Selektion verändert, wird das
    /// Overlay danach genau einmal neu aufgebaut.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));

        if state.take_overlay_dirty() {
            state.rebuild_overlay();
        }
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Marker ===
            AppCommand::CreateMarker { position } => handlers::markers::create(state, position)?,
            AppCommand::RepositionMarker {
                marker_id,
                position,
            } => handlers::markers::reposition(state, marker_id, position)?,
            AppCommand::DeleteSelectedMarker => handlers::markers::delete_selected(state),
            AppCommand::DeleteAllMarkers => handlers::markers::delete_all(state),

            // === Selektion ===
            AppCommand::SelectMarker { marker_id } => handlers::selection::select(state, marker_id),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Remote-Store ===
            AppCommand::ApplyRemoteCompletion { completion } => {
                handlers::sync::apply_completion(state, completion)
            }

            // === Karte & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanMap { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomMap { delta, focus } => handlers::view::zoom(state, delta, focus),
            AppCommand::FocusCluster { center, zoom_steps } => {
                handlers::view::focus_cluster(state, center, zoom_steps)
            }
            AppCommand::ResetView => handlers::view::reset(state),

            // === Lebenszyklus ===
            AppCommand::RequestExit => handlers::lifecycle::request_exit(state),
        }

        Ok(())
    }

    /// Übergibt alle eingereihten Requests an den Worker.
    pub fn flush_outbox(&mut self, state: &mut AppState, worker: &RemoteWorker) -> usize {
        let requests = state.sync.take_outbox();
        if requests.is_empty() {
            return 0;
        }
        worker.submit_all(requests)
    }

    /// Übernimmt alle bereits vorliegenden Completions des Workers.
    pub fn process_completions(
        &mut self,
        state: &mut AppState,
        worker: &RemoteWorker,
    ) -> anyhow::Result<usize> {
        let completions = worker.drain();
        let count = completions.len();
        for completion in completions {
            self.handle_intent(state, AppIntent::RemoteCompleted { completion })?;
        }
        Ok(count)
    }

    /// Führt die Outbox synchron gegen einen Store aus, bis sie leer ist.
    ///
    /// Folge-Requests aus Completions (verzögerte Updates, Orphan-Deletes)
    /// werden in derselben Schleife abgearbeitet. Liefert die Anzahl
    /// ausgeführter Requests.
    pub fn run_outbox_blocking(
        &mut self,
        state: &mut AppState,
        store: &dyn MarkerStore,
    ) -> anyhow::Result<usize> {
        let mut executed = 0;
        loop {
            let requests = state.sync.take_outbox();
            if requests.is_empty() {
                return Ok(executed);
            }
            for request in requests {
                executed += 1;
                let completion = execute(store, request);
                self.handle_intent(state, AppIntent::RemoteCompleted { completion })?;
            }
        }
    }
}
