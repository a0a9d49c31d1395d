//! Use-Case-Funktionen für Pan, Zoom und Größe der Zeichenfläche.

use crate::app::state::Interaction;
use crate::app::AppState;
use glam::Vec2;

/// Aktualisiert die gespeicherte Größe der Zeichenfläche.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Zoomt einen Schritt in Richtung von `delta`.
///
/// Der Canvas-Punkt unter `focal` (Screen-Pixel) bleibt stehen; ohne Fokus
/// wird die Mitte der Zeichenfläche verwendet. Delta 0 ändert nichts.
pub fn zoom_at(state: &mut AppState, delta: f32, focal: Option<Vec2>) {
    let Some(factor) = state.options.zoom_factor_for_delta(delta) else {
        return;
    };
    let focal = focal.unwrap_or_else(|| state.view.container_center());
    state.view.viewport.zoom_at(
        factor,
        focal,
        state.options.zoom_min,
        state.options.zoom_max,
    );
}

/// Passt das Feld in die Zeichenfläche ein und zentriert es.
///
/// Ohne bekannte Größe der Zeichenfläche bleibt der Sichtbereich unverändert.
pub fn reset_view(state: &mut AppState) {
    let field_size = state.options.field.size();
    let container = Vec2::from(state.view.viewport_size);
    if !state.view.viewport.fit_to_container(field_size, container) {
        log::debug!("Ansicht zurücksetzen: Zeichenfläche ohne Größe, übersprungen");
    }
}

/// Beginnt das Verschieben des Sichtbereichs.
pub fn begin_pan(state: &mut AppState, screen_pos: Vec2) {
    state.interaction = Interaction::Panning {
        last_screen: screen_pos,
        viewport_before: state.view.viewport,
    };
}

/// Verschiebt den Sichtbereich um die Zeigerbewegung seit dem letzten Aufruf.
pub fn pan_to(state: &mut AppState, screen_pos: Vec2) {
    if let Interaction::Panning { last_screen, .. } = &mut state.interaction {
        let delta = screen_pos - *last_screen;
        *last_screen = screen_pos;
        state.view.viewport.pan(delta);
    }
}
