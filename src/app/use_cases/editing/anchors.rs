//! Use-Cases: Anker setzen, einfügen, löschen und bearbeiten.

use crate::app::events::AnchorEdit;
use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::{AnchorPoint, SelectedPoint};
use glam::Vec2;

/// Mindestanzahl Anker eines Pfads; Löschen darunter wird abgelehnt.
pub const MIN_ANCHORS: usize = 2;

/// Hängt einen neuen Kurvenanker an das Pfadende und wählt ihn aus.
pub fn add_anchor_at(state: &mut AppState, position: Vec2) {
    state.record_undo_snapshot();

    let anchor = AnchorPoint::curved(position, state.options.new_anchor_handle_length);
    let index = state.spline.add_anchor(anchor);
    state.selection.selected = Some(SelectedPoint::Anchor(index));

    log::debug!(
        "Anker {} hinzugefügt bei ({:.1}, {:.1})",
        index,
        position.x,
        position.y
    );
}

/// Fügt einen Anker bei `t` auf dem Segment ein und wählt ihn aus.
///
/// Die Kurvenform bleibt erhalten. Steuerpunkt-Parameter `u` werden nicht
/// verschoben und zeigen danach auf einen anderen Kurvenort.
pub fn insert_anchor_on_curve(state: &mut AppState, segment: usize, t: f32) -> anyhow::Result<()> {
    if state.spline.segment(segment).is_none() {
        log::debug!("Einfügen: Segment {} existiert nicht", segment);
        return Ok(());
    }

    let before = Snapshot::from_state(state);

    if let Some(index) = state.spline.insert_anchor_on_curve(segment, t)? {
        state.history.record_snapshot(before);
        state.selection.selected = Some(SelectedPoint::Anchor(index));
        log::debug!(
            "Anker {} auf Segment {} bei t={:.3} eingefügt",
            index,
            segment,
            t
        );
    }
    Ok(())
}

/// Löscht einen Anker, sofern danach mindestens [`MIN_ANCHORS`] übrig bleiben.
///
/// Eine Auswahl auf dem gelöschten Anker (oder seinen Handles) wird aufgehoben,
/// Auswahlen späterer Anker rücken um eins nach vorne.
pub fn delete_anchor_point(state: &mut AppState, index: usize) {
    if index >= state.spline.len() {
        log::debug!("Anker {} nicht gefunden", index);
        return;
    }
    if state.spline.len() <= MIN_ANCHORS {
        log::warn!(
            "Anker {} nicht gelöscht: Ein Pfad braucht mindestens {} Anker",
            index,
            MIN_ANCHORS
        );
        state.ui.status_message = Some(format!(
            "Ein Pfad braucht mindestens {} Anker",
            MIN_ANCHORS
        ));
        return;
    }

    state.record_undo_snapshot();
    state.spline.remove_anchor(index);

    if let Some(selected) = state.selection.selected {
        if let Some(selected_index) = selected.anchor_index() {
            if selected_index == index {
                state.selection.clear();
            } else if selected_index > index {
                state.selection.selected = Some(selected.with_anchor_index(selected_index - 1));
            }
        }
    }

    log::debug!("Anker {} gelöscht", index);
}

/// Übernimmt eine manuelle Änderung (Position, Name) aus dem Eigenschaften-Panel.
pub fn update_anchor_point(state: &mut AppState, index: usize, edit: AnchorEdit) {
    if state.spline.anchor(index).is_none() {
        log::debug!("Anker {} nicht gefunden", index);
        return;
    }

    state.record_undo_snapshot();
    state.spline.update_anchor(index, |anchor| {
        if let Some(position) = edit.position {
            anchor.position = position;
        }
        if let Some(name) = edit.name {
            anchor.name = name;
        }
    });
}

/// Zieh-Schritt: setzt die Ankerposition ohne eigenen Undo-Eintrag.
pub fn move_anchor_point(state: &mut AppState, index: usize, position: Vec2) {
    if !state.spline.move_anchor(index, position) {
        log::debug!("Anker {} nicht gefunden", index);
    }
}

/// Schaltet einen Anker zwischen gerade und Kurve um.
pub fn toggle_anchor_curve(state: &mut AppState, index: usize) {
    if state.spline.anchor(index).is_none() {
        log::debug!("Anker {} nicht gefunden", index);
        return;
    }

    state.record_undo_snapshot();
    state
        .spline
        .toggle_anchor_curve(index, state.options.curve_toggle_handle_length);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControlPoint, ControlPointColor, Spline};
    use approx::assert_relative_eq;

    fn state_with_anchors(count: usize) -> AppState {
        let mut state = AppState::new();
        state.spline = Spline::new(
            (0..count)
                .map(|i| AnchorPoint::straight(Vec2::new(i as f32 * 100.0, 0.0)))
                .collect(),
        );
        state
    }

    #[test]
    fn einfuegen_ausserhalb_des_segments_hinterlaesst_keinen_undo_schritt() {
        let mut state = state_with_anchors(3);
        let before = state.spline.clone();

        assert!(insert_anchor_on_curve(&mut state, 0, 1.5).is_err());

        assert_eq!(state.spline, before);
        assert!(!state.can_undo());
        assert!(state.selection.selected.is_none());
    }

    #[test]
    fn neuer_anker_ist_kurve_und_ausgewaehlt() {
        let mut state = state_with_anchors(2);

        add_anchor_at(&mut state, Vec2::new(300.0, 50.0));

        let anchor = state.spline.anchor(2).expect("Anker angehängt");
        assert!(anchor.is_curved);
        assert!(anchor.handles_aligned);
        assert_eq!(anchor.handle_in_offset, Vec2::new(-20.0, 0.0));
        assert_eq!(anchor.handle_out_offset, Vec2::new(20.0, 0.0));
        assert_eq!(state.selection.selected, Some(SelectedPoint::Anchor(2)));
        assert!(state.can_undo());
    }

    #[test]
    fn loeschen_bei_zwei_ankern_wird_abgelehnt() {
        let mut state = state_with_anchors(2);
        state.selection.selected = Some(SelectedPoint::Anchor(1));

        delete_anchor_point(&mut state, 1);

        assert_eq!(state.spline.len(), 2);
        assert!(state.ui.status_message.is_some());
        assert!(!state.can_undo());
    }

    #[test]
    fn loeschen_verschiebt_spaetere_auswahl() {
        let mut state = state_with_anchors(4);
        state.selection.selected = Some(SelectedPoint::HandleIn(3));

        delete_anchor_point(&mut state, 1);

        assert_eq!(state.spline.len(), 3);
        assert_eq!(state.selection.selected, Some(SelectedPoint::HandleIn(2)));
    }

    #[test]
    fn loeschen_des_ausgewaehlten_ankers_hebt_auswahl_auf() {
        let mut state = state_with_anchors(3);
        state.selection.selected = Some(SelectedPoint::Anchor(1));

        delete_anchor_point(&mut state, 1);

        assert_eq!(state.spline.len(), 2);
        assert!(state.selection.selected.is_none());
    }

    #[test]
    fn einfuegen_verschiebt_steuerpunkt_parameter_nicht() {
        let mut state = state_with_anchors(3);
        state
            .controls
            .add(ControlPoint::new(1, 1.5, ControlPointColor::Green));

        insert_anchor_on_curve(&mut state, 0, 0.5).expect("Einfügen ohne Fehler");

        assert_eq!(state.spline.len(), 4);
        assert_eq!(state.selection.selected, Some(SelectedPoint::Anchor(1)));
        let u = state.controls.get(1).expect("Steuerpunkt vorhanden").u;
        assert_relative_eq!(u, 1.5);
    }

    #[test]
    fn einfuegen_in_unbekanntes_segment_ist_noop() {
        let mut state = state_with_anchors(2);

        insert_anchor_on_curve(&mut state, 5, 0.5).expect("kein Fehler");

        assert_eq!(state.spline.len(), 2);
        assert!(!state.can_undo());
    }

    #[test]
    fn manuelle_bearbeitung_setzt_position_und_name() {
        let mut state = state_with_anchors(2);

        update_anchor_point(
            &mut state,
            0,
            AnchorEdit {
                position: Some(Vec2::new(5.0, 6.0)),
                name: Some("Start".into()),
            },
        );

        let anchor = state.spline.anchor(0).expect("Anker vorhanden");
        assert_eq!(anchor.position, Vec2::new(5.0, 6.0));
        assert_eq!(anchor.name, "Start");
    }

    #[test]
    fn umschalten_setzt_handles_der_laenge_dreissig() {
        let mut state = state_with_anchors(2);

        toggle_anchor_curve(&mut state, 1);

        let anchor = state.spline.anchor(1).expect("Anker vorhanden");
        assert!(anchor.is_curved);
        assert_eq!(anchor.handle_out_offset, Vec2::new(30.0, 0.0));
    }
}
