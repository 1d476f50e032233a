//! UI-Komponenten: Kartenfläche, Bedienleiste, Status-Bar und Input-Handling.

pub mod controls;
pub mod input;
/// Kartenfläche mit Kacheln und Cluster-Overlay
pub mod map_view;
pub mod status;

pub use controls::render_controls;
pub use input::InputState;
pub use map_view::render_map;
pub use status::render_status_bar;
