//! Handler für Remote-Completions.

use crate::app::use_cases;
use crate::app::AppState;
use crate::store::RemoteCompletion;

/// Übernimmt das Ergebnis eines Remote-Requests.
pub fn apply_completion(state: &mut AppState, completion: RemoteCompletion) {
    use_cases::sync::apply_completion(state, completion);
}
