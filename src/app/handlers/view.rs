//! Handler für Pan, Zoom und Größe der Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Zoomt einen Schritt, verankert am Fokuspunkt oder an der Flächenmitte.
pub fn zoom_at(state: &mut AppState, delta: f32, focal: Option<Vec2>) {
    use_cases::viewport::zoom_at(state, delta, focal);
}

/// Passt das Feld in die Zeichenfläche ein.
pub fn reset_view(state: &mut AppState) {
    use_cases::viewport::reset_view(state);
    log::info!(
        "Ansicht zurückgesetzt (Zoom {:.0}%)",
        state.view.viewport.scale * 100.0
    );
}

/// Aktualisiert die Größe der Zeichenfläche im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Beginnt das Verschieben des Sichtbereichs.
pub fn begin_pan(state: &mut AppState, screen_pos: Vec2) {
    use_cases::viewport::begin_pan(state, screen_pos);
}

/// Verschiebt den Sichtbereich bis zur Zeigerposition.
pub fn pan_to(state: &mut AppState, screen_pos: Vec2) {
    use_cases::viewport::pan_to(state, screen_pos);
}
