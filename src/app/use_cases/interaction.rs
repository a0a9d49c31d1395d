//! Use-Cases der Zeiger-Interaktion: Werkzeug, Auswahl, Ziehen, Abbrechen.

use super::editing;
use crate::app::history::Snapshot;
use crate::app::hit_test;
use crate::app::state::{Interaction, ToolMode};
use crate::app::AppState;
use crate::core::{HandleSide, SelectedPoint};
use glam::Vec2;

/// Wechselt das Werkzeug. Nur ein echter Wechsel hebt die Auswahl auf.
pub fn set_active_tool(state: &mut AppState, tool: ToolMode) {
    if state.editor.active_tool == tool {
        return;
    }
    end_interaction(state);
    state.editor.active_tool = tool;
    state.selection.clear();
    log::info!("Werkzeug: {}", tool.label());
}

/// Setzt oder löscht die Auswahl. Nicht existierende Punkte werden ignoriert.
pub fn select_point(state: &mut AppState, point: Option<SelectedPoint>) {
    let exists = match point {
        None => true,
        Some(SelectedPoint::Control(id)) => state.controls.get(id).is_some(),
        Some(other) => other
            .anchor_index()
            .is_some_and(|index| index < state.spline.len()),
    };
    if !exists {
        log::debug!("Auswahl ignoriert, Punkt existiert nicht: {:?}", point);
        return;
    }
    state.selection.selected = point;
}

/// Beginnt das Ziehen; der Zustand davor dient für Abbruch und Undo.
///
/// Ein noch offenes Ziehen (verlorenes Loslassen) wird vorher abgeschlossen.
pub fn begin_drag(state: &mut AppState, target: SelectedPoint) {
    end_interaction(state);
    let before = Box::new(Snapshot::from_state(state));
    state.interaction = Interaction::Dragging { target, before };
}

/// Führt das gezogene Element zur Position (Feld-Zoll).
///
/// Anker folgen direkt, Handles nach der Spiegelregel, Steuerpunkte rasten
/// auf den nächsten Kurvenpunkt im Suchradius ein (sonst unverändert).
pub fn drag_to(state: &mut AppState, position: Vec2) {
    let target = match &state.interaction {
        Interaction::Dragging { target, .. } => *target,
        _ => return,
    };
    match target {
        SelectedPoint::Anchor(index) => {
            editing::move_anchor_point(state, index, position);
        }
        SelectedPoint::HandleOut(index) => drag_handle(state, index, HandleSide::Out, position),
        SelectedPoint::HandleIn(index) => drag_handle(state, index, HandleSide::In, position),
        SelectedPoint::Control(id) => {
            if let Some(hit) = hit_test::nearest_on_curve(state, position) {
                editing::move_control_point(state, id, hit.u);
            }
        }
    }
}

fn drag_handle(state: &mut AppState, index: usize, side: HandleSide, position: Vec2) {
    let Some(anchor) = state.spline.anchor(index) else {
        return;
    };
    let offset = position - anchor.position;
    state.spline.set_handle_mirrored(index, side, offset);
}

/// Führt die Cursorposition (Feld-Zoll) für die Statusleiste nach.
pub fn update_cursor(state: &mut AppState, screen_pos: Vec2) {
    state.view.cursor_inch = state.view.screen_to_inch(screen_pos);
}

/// Beendet Ziehen oder Verschieben regulär.
///
/// Ein Ziehen, das Pfad oder Steuerpunkte verändert hat, wird als ein
/// einzelner Undo-Schritt abgelegt.
pub fn end_interaction(state: &mut AppState) {
    if let Interaction::Dragging { target, before } = std::mem::take(&mut state.interaction) {
        if before.differs_from(state) {
            state.history.record_snapshot(*before);
            log::debug!("Ziehen von {:?} abgeschlossen", target);
        }
    }
}

/// Bricht die laufende Interaktion ab (Escape).
///
/// Ziehen stellt Pfad und Auswahl von vor dem Ziehen wieder her, Verschieben
/// den vorherigen Sichtbereich. Ohne Interaktion wird die Auswahl aufgehoben.
pub fn cancel_interaction(state: &mut AppState) {
    match std::mem::take(&mut state.interaction) {
        Interaction::Dragging { before, .. } => {
            before.apply_to(state);
            log::debug!("Ziehen abgebrochen");
        }
        Interaction::Panning {
            viewport_before, ..
        } => {
            state.view.viewport = viewport_before;
            log::debug!("Verschieben abgebrochen");
        }
        Interaction::Idle => state.selection.clear(),
    }
}

/// Löscht den ausgewählten Anker oder Steuerpunkt und hebt die Auswahl auf.
///
/// Ausgewählte Handles löschen nichts. Anker unterliegen der Mindestanzahl.
/// Ein laufendes Ziehen endet vorher, da sich die Indizes verschieben.
pub fn delete_selected(state: &mut AppState) {
    end_interaction(state);
    match state.selection.selected {
        Some(SelectedPoint::Anchor(index)) => editing::delete_anchor_point(state, index),
        Some(SelectedPoint::Control(id)) => editing::delete_control_point(state, id),
        Some(SelectedPoint::HandleOut(_)) | Some(SelectedPoint::HandleIn(_)) | None => {}
    }
    state.selection.clear();
}
