//! Use-Case-Funktionen für Marker-Operationen.
//!
//! Aufgeteilt nach Operation:
//! - `create`: Marker anlegen (optimistisch, Create-Request einreihen)
//! - `reposition`: Marker verschieben
//! - `delete`: Einzel- und Batch-Löschung

mod create;
mod delete;
mod reposition;

pub use create::create_marker;
pub use delete::{delete_all_markers, delete_selected_marker};
pub use reposition::reposition_marker;
