//! Handler für Anker-, Steuerpunkt- und Attribut-Editing.

use crate::app::events::AnchorEdit;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{AttributeUpdate, ControlPointAttribute, ControlPointUpdate};
use glam::Vec2;

/// Hängt einen neuen Anker an.
pub fn add_anchor(state: &mut AppState, position: Vec2) {
    use_cases::editing::add_anchor_at(state, position);
}

/// Fügt einen Anker auf der Kurve ein.
pub fn insert_anchor(state: &mut AppState, segment: usize, t: f32) -> anyhow::Result<()> {
    use_cases::editing::insert_anchor_on_curve(state, segment, t)
}

/// Löscht einen Anker (mit Mindestanzahl-Prüfung).
pub fn delete_anchor(state: &mut AppState, index: usize) {
    use_cases::editing::delete_anchor_point(state, index);
}

/// Übernimmt eine manuelle Anker-Bearbeitung.
pub fn update_anchor(state: &mut AppState, index: usize, edit: AnchorEdit) {
    use_cases::editing::update_anchor_point(state, index, edit);
}

/// Schaltet einen Anker zwischen gerade und Kurve um.
pub fn toggle_anchor_curve(state: &mut AppState, index: usize) {
    use_cases::editing::toggle_anchor_curve(state, index);
}

/// Legt einen Steuerpunkt an.
pub fn add_control_point(state: &mut AppState, u: f32) {
    use_cases::editing::add_control_point_at(state, u);
}

/// Ändert Kopfdaten eines Steuerpunkts.
pub fn update_control_point(state: &mut AppState, id: u64, update: ControlPointUpdate) {
    use_cases::editing::update_control_point(state, id, update);
}

/// Löscht einen Steuerpunkt.
pub fn delete_control_point(state: &mut AppState, id: u64) {
    use_cases::editing::delete_control_point(state, id);
}

/// Fügt ein Attribut hinzu und propagiert eine Ablehnung.
pub fn add_attribute(
    state: &mut AppState,
    id: u64,
    attribute: ControlPointAttribute,
) -> anyhow::Result<()> {
    use_cases::editing::add_attribute(state, id, attribute)
}

/// Ändert ein Attribut.
pub fn update_attribute(state: &mut AppState, id: u64, index: usize, update: AttributeUpdate) {
    use_cases::editing::update_attribute(state, id, index, update);
}

/// Entfernt ein Attribut.
pub fn remove_attribute(state: &mut AppState, id: u64, index: usize) {
    use_cases::editing::remove_attribute(state, id, index);
}
