//! QuestMap Editor.
//!
//! Desktop-Editor für Quest-Marker auf einer Karte mit Synchronisation
//! gegen einen Remote-Dokumentenspeicher (Firestore oder In-Memory).

use eframe::egui;
use quest_map_editor::shared::options::API_KEY_ENV;
use quest_map_editor::shared::StoreOptions;
use quest_map_editor::store::Waker;
use quest_map_editor::{
    ui, AppController, AppIntent, AppOptions, AppState, FirestoreStore, MarkerStore, MemoryStore,
    RemoteWorker, StoreBackend,
};
use std::sync::Arc;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("QuestMap Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 820.0])
                .with_title("QuestMap Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "QuestMap Editor",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                let app = EditorApp::new(&cc.egui_ctx)?;
                Ok(Box::new(app))
            }),
        )
    }
}

/// Wählt das Store-Backend gemäß Optionen; fällt auf In-Memory zurück.
fn build_store(options: &StoreOptions) -> Arc<dyn MarkerStore> {
    match options.backend {
        StoreBackend::Firestore => match FirestoreStore::new(options.firestore.clone()) {
            Ok(store) => {
                log::info!(
                    "Firestore-Store aktiv (Projekt {}, Collection {})",
                    store.config().project_id,
                    store.config().collection
                );
                Arc::new(store)
            }
            Err(e) => {
                log::warn!("Firestore nicht verfügbar ({}), verwende In-Memory-Store", e);
                Arc::new(MemoryStore::new())
            }
        },
        StoreBackend::Memory => {
            log::warn!("In-Memory-Store aktiv: Marker überleben keinen Neustart");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    worker: RemoteWorker,
    input: ui::InputState,
}

impl EditorApp {
    fn new(ctx: &egui::Context) -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let mut options = AppOptions::load_from_file(&config_path);
        options.apply_api_key_override(std::env::var(API_KEY_ENV).ok());

        let store = build_store(&options.store);
        let repaint_ctx = ctx.clone();
        let waker: Waker = Box::new(move || repaint_ctx.request_repaint());
        let worker = RemoteWorker::spawn(store, Some(waker))?;

        Ok(Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            worker,
            input: ui::InputState::new(),
        })
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if let Err(e) = self
            .controller
            .process_completions(&mut self.state, &self.worker)
        {
            log::error!("Completion handling failed: {:#}", e);
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.controller.flush_outbox(&mut self.state, &self.worker);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state, self.worker.backend_name());
        events.extend(ui::render_controls(ctx, &self.state));

        if ctx.input(|i| i.viewport().close_requested()) {
            events.push(AppIntent::ExitRequested);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            events.extend(ui::render_map(ui, &self.state, &mut self.input));
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.input.drag_preview().is_some()
        {
            ctx.request_repaint();
        }
    }
}
