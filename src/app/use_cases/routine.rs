//! Use-Cases: Routine in den Editor laden und zurückschreiben.

use crate::app::state::Interaction;
use crate::app::AppState;
use crate::core::{ControlPointList, Routine, Spline};
use std::time::SystemTime;

/// Kopiert eine Routine in den Arbeitszustand des Editors.
///
/// Auswahl, laufende Interaktion und Undo-History werden zurückgesetzt.
pub fn load_routine(state: &mut AppState, routine: Routine) {
    state.spline = Spline::new(routine.anchor_points.clone());
    state.controls = ControlPointList::new(routine.control_points.clone());
    state.selection.clear();
    state.interaction = Interaction::Idle;
    state.history.clear();

    log::info!(
        "Routine '{}' geladen: {} Anker, {} Steuerpunkte",
        routine.name,
        state.spline.len(),
        state.controls.len()
    );
    state.routine = Some(routine);
}

/// Schreibt den Arbeitszustand in die geladene Routine zurück.
pub fn sync_to_routine(state: &mut AppState) {
    let Some(routine) = state.routine.as_mut() else {
        log::debug!("Keine Routine geladen, nichts zu synchronisieren");
        return;
    };
    routine.anchor_points = state.spline.anchors().to_vec();
    routine.control_points = state.controls.points().to_vec();
    routine.is_dirty = true;
    routine.last_modified = SystemTime::now();

    log::info!("Routine '{}' aktualisiert", routine.name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SelectedPoint;
    use glam::Vec2;

    #[test]
    fn laden_setzt_auswahl_und_history_zurueck() {
        let mut state = AppState::new();
        state.selection.selected = Some(SelectedPoint::Anchor(0));
        state.record_undo_snapshot();

        load_routine(&mut state, Routine::demo());

        assert_eq!(state.spline.len(), 3);
        assert_eq!(state.controls.len(), 2);
        assert!(state.selection.selected.is_none());
        assert!(!state.can_undo());
    }

    #[test]
    fn zurueckschreiben_markiert_routine_als_geaendert() {
        let mut state = AppState::new();
        load_routine(&mut state, Routine::demo());
        state.spline.move_anchor(0, Vec2::new(1.0, 1.0));

        sync_to_routine(&mut state);

        let routine = state.routine.as_ref().expect("Routine geladen");
        assert!(routine.is_dirty);
        assert_eq!(routine.anchor_points[0].position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn zurueckschreiben_ohne_routine_ist_noop() {
        let mut state = AppState::new();
        sync_to_routine(&mut state);
        assert!(state.routine.is_none());
    }
}
