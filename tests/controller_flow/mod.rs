//! Ablauf-Tests: Controller + In-Memory-Store, Remote-Requests synchron ausgeführt.

mod deletion;
mod markers;
mod sync_races;

use quest_map_editor::store::{execute, RemoteCompletion};
use quest_map_editor::{AppController, AppIntent, AppState, LatLng, MemoryStore};

/// Testaufbau aus Controller, State und In-Memory-Store.
pub struct Harness {
    pub controller: AppController,
    pub state: AppState,
    pub store: MemoryStore,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            controller: AppController::new(),
            state: AppState::new(),
            store: MemoryStore::new(),
        }
    }

    pub fn intent(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    /// Führt die Outbox inkl. aller Folge-Requests aus.
    pub fn settle(&mut self) -> usize {
        self.controller
            .run_outbox_blocking(&mut self.state, &self.store)
            .expect("Outbox sollte ohne Fehler abgearbeitet werden")
    }

    /// Führt nur die aktuell eingereihten Requests aus, ohne Completions zu übernehmen.
    pub fn execute_pending(&mut self) -> Vec<RemoteCompletion> {
        self.state
            .sync
            .take_outbox()
            .into_iter()
            .map(|request| execute(&self.store, request))
            .collect()
    }

    pub fn complete(&mut self, completion: RemoteCompletion) {
        self.intent(AppIntent::RemoteCompleted { completion });
    }

    /// Klick auf die Karte mit anschließender Synchronisation.
    pub fn create_at(&mut self, lat: f64, lng: f64) -> u64 {
        let expected = self.state.markers.peek_next_id();
        self.intent(AppIntent::MapClicked {
            position: LatLng::new(lat, lng),
        });
        self.settle();
        expected
    }

    pub fn select(&mut self, marker_id: u64) {
        self.intent(AppIntent::MarkerClicked { marker_id });
    }

    pub fn remote_id(&self, marker_id: u64) -> Option<String> {
        self.state
            .markers
            .get(marker_id)
            .and_then(|m| m.remote_id().map(str::to_string))
    }
}
