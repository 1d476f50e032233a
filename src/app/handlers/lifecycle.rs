//! Handler für den Anwendungs-Lebenszyklus.

use crate::app::AppState;

/// Fordert das kontrollierte Beenden an.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
