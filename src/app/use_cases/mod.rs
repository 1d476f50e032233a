//! Use-Cases der Application-Layer-Orchestrierung.

pub mod markers;
pub mod selection;
pub mod sync;
pub mod viewport;
