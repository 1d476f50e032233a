//! QuestMap Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod overlay;
pub mod shared;
pub mod store;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, ViewState};
pub use core::{LatLng, MapViewport, Marker, MarkerDocument, MarkerList, SyncStatus};
pub use overlay::{Cluster, ClusterOverlay, MarkerVisual, OverlayDiff};
pub use shared::{AppOptions, StoreBackend};
pub use store::{
    FirestoreStore, MarkerStore, MemoryStore, RemoteCompletion, RemoteWorker, StoreError,
};
