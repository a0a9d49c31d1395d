//! Handler für Feldbild und Routine.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Routine;

/// Lädt ein Feldbild und propagiert Fehler an den Aufrufer.
pub fn load_field_image(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::field_image::load_field_image(state, path)
}

/// Lädt eine Routine in den Editor.
pub fn load_routine(state: &mut AppState, routine: Routine) {
    use_cases::routine::load_routine(state, routine);
}

/// Schreibt den Arbeitsstand in die Routine zurück.
pub fn sync_routine(state: &mut AppState) {
    use_cases::routine::sync_to_routine(state);
}
