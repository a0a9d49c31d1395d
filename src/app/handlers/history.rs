//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::AppState;

/// Eine laufende Interaktion wird vor Undo/Redo abgebrochen, damit der
/// Zustand vor dem Ziehen nicht nachträglich als Schritt abgelegt wird.
fn settle_interaction(state: &mut AppState) {
    if !state.interaction.is_idle() {
        use_cases::interaction::cancel_interaction(state);
    }
}

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    settle_interaction(state);
    let current = Snapshot::from_state(state);
    match state.history.pop_undo_with_current(current) {
        Some(prev) => {
            prev.apply_to(state);
            log::info!(
                "Undo: {} Anker, {} Steuerpunkte",
                state.anchor_count(),
                state.control_count()
            );
        }
        None => log::debug!("Undo: nichts zu tun"),
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    settle_interaction(state);
    let current = Snapshot::from_state(state);
    match state.history.pop_redo_with_current(current) {
        Some(next) => {
            next.apply_to(state);
            log::info!(
                "Redo: {} Anker, {} Steuerpunkte",
                state.anchor_count(),
                state.control_count()
            );
        }
        None => log::debug!("Redo: nichts zu tun"),
    }
}
