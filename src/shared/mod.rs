//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, `ui` und `main` gemeinsam nutzen.

pub mod options;

pub use options::{AppOptions, StoreBackend, StoreOptions};
