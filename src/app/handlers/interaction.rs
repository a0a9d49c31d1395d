//! Handler für Werkzeug, Auswahl und Zeiger-Interaktion.

use crate::app::state::ToolMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SelectedPoint;
use glam::Vec2;

/// Wechselt das aktive Werkzeug.
pub fn set_active_tool(state: &mut AppState, tool: ToolMode) {
    use_cases::interaction::set_active_tool(state, tool);
}

/// Setzt oder löscht die Auswahl.
pub fn select_point(state: &mut AppState, point: Option<SelectedPoint>) {
    use_cases::interaction::select_point(state, point);
}

/// Beginnt das Ziehen eines Elements.
pub fn begin_drag(state: &mut AppState, target: SelectedPoint) {
    use_cases::interaction::begin_drag(state, target);
}

/// Führt das gezogene Element nach.
pub fn drag_to(state: &mut AppState, position: Vec2) {
    use_cases::interaction::drag_to(state, position);
}

/// Aktualisiert die Cursorposition.
pub fn update_cursor(state: &mut AppState, screen_pos: Vec2) {
    use_cases::interaction::update_cursor(state, screen_pos);
}

/// Beendet die laufende Interaktion.
pub fn end(state: &mut AppState) {
    use_cases::interaction::end_interaction(state);
}

/// Bricht die laufende Interaktion ab.
pub fn cancel(state: &mut AppState) {
    use_cases::interaction::cancel_interaction(state);
}

/// Löscht das ausgewählte Element.
pub fn delete_selected(state: &mut AppState) {
    use_cases::interaction::delete_selected(state);
}
