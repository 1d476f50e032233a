//! Core-Domänentypen: Koordinaten, Viewport, Marker, Marker-Liste, Dokumente.

pub mod document;
pub mod geo;
/// Marker und Synchronisationsstatus
pub mod marker;
pub mod marker_list;

pub use document::MarkerDocument;
pub use geo::{project, unproject, LatLng, MapViewport, TILE_SIZE};
pub use marker::{Marker, SyncStatus};
pub use marker_list::MarkerList;
