//! Application State: Marker, Selektion, Karte, Overlay und Outbox.

mod app_state;
mod selection;
mod sync;
mod view;

pub use app_state::AppState;
pub use selection::SelectionState;
pub use sync::SyncQueue;
pub use view::ViewState;
