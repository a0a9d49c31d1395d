//! Use-Cases: Steuerpunkte setzen, bearbeiten und löschen.

use crate::app::AppState;
use crate::core::{ControlPoint, ControlPointColor, ControlPointUpdate, SelectedPoint};

/// Legt einen blauen Steuerpunkt ohne Attribute bei `u` an und wählt ihn aus.
pub fn add_control_point_at(state: &mut AppState, u: f32) {
    state.record_undo_snapshot();

    let id = state.next_control_id();
    state
        .controls
        .add(ControlPoint::new(id, u, ControlPointColor::Blue));
    state.selection.selected = Some(SelectedPoint::Control(id));

    log::debug!("Steuerpunkt {} bei u={:.3} angelegt", id, u);
}

/// Übernimmt Parameter, Name und Farbe aus dem Eigenschaften-Panel.
pub fn update_control_point(state: &mut AppState, id: u64, update: ControlPointUpdate) {
    if state.controls.get(id).is_none() {
        log::debug!("Steuerpunkt {} nicht gefunden", id);
        return;
    }

    state.record_undo_snapshot();
    state.controls.update(id, update);
}

/// Löscht einen Steuerpunkt; eine Auswahl auf ihm wird aufgehoben.
pub fn delete_control_point(state: &mut AppState, id: u64) {
    if state.controls.get(id).is_none() {
        log::debug!("Steuerpunkt {} nicht gefunden", id);
        return;
    }

    state.record_undo_snapshot();
    state.controls.delete(id);
    if state.selection.control_id() == Some(id) {
        state.selection.clear();
    }

    log::debug!("Steuerpunkt {} gelöscht", id);
}

/// Zieh-Schritt: setzt `u` ohne eigenen Undo-Eintrag.
pub fn move_control_point(state: &mut AppState, id: u64, u: f32) {
    if !state.controls.move_to(id, u) {
        log::debug!("Steuerpunkt {} nicht gefunden", id);
    }
}
