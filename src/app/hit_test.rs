//! Treffer-Tests für Zeiger-Klicks in der Zeichenfläche.
//!
//! Alle Abstände in Feld-Zoll. Die Reihenfolge der Prüfungen in
//! [`resolve_press`] legt die Priorität fest (erster Treffer gewinnt).

use super::state::ToolMode;
use super::AppState;
use crate::core::{SelectedPoint, SplineHit};
use glam::Vec2;

/// Ergebnis eines Klicks in die Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressTarget {
    /// Vorhandenes Element greifen und ziehen
    Grab(SelectedPoint),
    /// Anker auf der Kurve einfügen
    InsertOnCurve { segment: usize, t: f32 },
    /// Neuen Anker ans Pfadende setzen
    AppendAnchor { position: Vec2 },
    /// Neuen Steuerpunkt bei `u` anlegen
    NewControl { u: f32 },
    /// Nichts getroffen: Auswahl aufheben und Sichtbereich verschieben
    Empty,
}

/// Ermittelt das Ziel eines Klicks bei `inch` (Feld-Zoll).
pub fn resolve_press(state: &AppState, inch: Vec2, modifier: bool) -> PressTarget {
    let tool = state.editor.active_tool;

    if tool == ToolMode::Anchor {
        if let Some(target) = pick_handle(state, inch) {
            return PressTarget::Grab(target);
        }
        if let Some(index) = pick_anchor(state, inch) {
            return PressTarget::Grab(SelectedPoint::Anchor(index));
        }
    }

    if tool == ToolMode::Control {
        if let Some(id) = pick_control(state, inch) {
            return PressTarget::Grab(SelectedPoint::Control(id));
        }
    }

    if !modifier {
        return PressTarget::Empty;
    }

    match tool {
        ToolMode::Anchor => {
            if let Some(hit) = nearest_on_curve(state, inch) {
                // Segmentenden liegen auf vorhandenen Ankern
                let inside = hit.t > 0.0 && hit.t < 1.0;
                if inside && hit.distance <= state.options.curve_insert_radius {
                    return PressTarget::InsertOnCurve {
                        segment: hit.segment,
                        t: hit.t,
                    };
                }
            }
            PressTarget::AppendAnchor { position: inch }
        }
        ToolMode::Control => match nearest_on_curve(state, inch) {
            Some(hit) => PressTarget::NewControl { u: hit.u },
            None => PressTarget::Empty,
        },
    }
}

/// Handles des ausgewählten Kurvenankers; das ausgehende Handle hat Vorrang.
fn pick_handle(state: &AppState, inch: Vec2) -> Option<SelectedPoint> {
    let index = state.selection.anchor_index()?;
    let anchor = state.spline.anchor(index)?;
    if !anchor.is_curved {
        return None;
    }
    let radius = state.options.point_hit_radius;
    if anchor.handle_out().distance(inch) < radius {
        return Some(SelectedPoint::HandleOut(index));
    }
    if anchor.handle_in().distance(inch) < radius {
        return Some(SelectedPoint::HandleIn(index));
    }
    None
}

/// Erster Anker innerhalb des Trefferradius.
pub fn pick_anchor(state: &AppState, inch: Vec2) -> Option<usize> {
    let radius = state.options.point_hit_radius;
    state
        .spline
        .anchors()
        .iter()
        .position(|anchor| anchor.position.distance(inch) < radius)
}

/// Erster Steuerpunkt (Einfügereihenfolge), dessen Kurvenposition getroffen wurde.
pub fn pick_control(state: &AppState, inch: Vec2) -> Option<u64> {
    let radius = state.options.point_hit_radius;
    state
        .controls
        .points()
        .iter()
        .find(|point| state.spline.point_at_u(point.u).distance(inch) < radius)
        .map(|point| point.id)
}

/// Nächster Kurvenpunkt, sofern näher als der Suchradius.
pub fn nearest_on_curve(state: &AppState, inch: Vec2) -> Option<SplineHit> {
    state
        .spline
        .nearest_point(inch, state.options.curve_search_steps)
        .filter(|hit| hit.distance < state.options.curve_search_radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnchorPoint, ControlPoint, ControlPointColor, Spline};

    fn state_with_path() -> AppState {
        let mut state = AppState::new();
        state.spline = Spline::new(vec![
            AnchorPoint::straight(Vec2::new(0.0, 0.0)),
            AnchorPoint::curved(Vec2::new(100.0, 0.0), 20.0),
            AnchorPoint::straight(Vec2::new(200.0, 0.0)),
        ]);
        state
    }

    #[test]
    fn handle_hat_vorrang_vor_anker() {
        let mut state = state_with_path();
        // Anker 2 liegt auf dem ausgehenden Handle von Anker 1
        state.spline = Spline::new(vec![
            AnchorPoint::straight(Vec2::new(0.0, 0.0)),
            AnchorPoint::curved(Vec2::new(100.0, 0.0), 20.0),
            AnchorPoint::straight(Vec2::new(120.0, 0.0)),
        ]);
        state.selection.selected = Some(SelectedPoint::Anchor(1));

        assert_eq!(
            resolve_press(&state, Vec2::new(120.0, 1.0), false),
            PressTarget::Grab(SelectedPoint::HandleOut(1))
        );

        state.selection.clear();
        assert_eq!(
            resolve_press(&state, Vec2::new(120.0, 1.0), false),
            PressTarget::Grab(SelectedPoint::Anchor(2))
        );
    }

    #[test]
    fn handles_gerader_anker_werden_ignoriert() {
        let mut state = state_with_path();
        state.selection.selected = Some(SelectedPoint::Anchor(0));
        assert_eq!(
            resolve_press(&state, Vec2::new(20.0, 0.0), false),
            PressTarget::Empty
        );
    }

    #[test]
    fn steuerpunkte_nur_im_steuerpunkt_werkzeug() {
        let mut state = state_with_path();
        state
            .controls
            .add(ControlPoint::new(7, 1.0, ControlPointColor::Red));

        assert_eq!(
            resolve_press(&state, Vec2::new(100.0, 2.0), false),
            PressTarget::Grab(SelectedPoint::Anchor(1))
        );

        state.editor.active_tool = ToolMode::Control;
        assert_eq!(
            resolve_press(&state, Vec2::new(100.0, 2.0), false),
            PressTarget::Grab(SelectedPoint::Control(7))
        );
    }

    #[test]
    fn modifier_nahe_kurve_fuegt_ein_sonst_anhaengen() {
        let state = state_with_path();

        match resolve_press(&state, Vec2::new(50.0, 3.0), true) {
            PressTarget::InsertOnCurve { segment, .. } => assert_eq!(segment, 0),
            other => panic!("Einfügen erwartet, erhalten: {other:?}"),
        }

        assert_eq!(
            resolve_press(&state, Vec2::new(50.0, 20.0), true),
            PressTarget::AppendAnchor {
                position: Vec2::new(50.0, 20.0)
            }
        );
        assert_eq!(
            resolve_press(&state, Vec2::new(50.0, 3.0), false),
            PressTarget::Empty
        );
    }

    #[test]
    fn treffer_am_segmentende_haengt_an_statt_einzufuegen() {
        let state = state_with_path();

        // Nächster Kurvenpunkt ist der Pfadanfang (t = 0) im Einfügeradius
        assert_eq!(
            resolve_press(&state, Vec2::new(-8.0, 0.0), true),
            PressTarget::AppendAnchor {
                position: Vec2::new(-8.0, 0.0)
            }
        );
    }

    #[test]
    fn neuer_steuerpunkt_nur_in_kurvennaehe() {
        let mut state = state_with_path();
        state.editor.active_tool = ToolMode::Control;

        assert!(matches!(
            resolve_press(&state, Vec2::new(150.0, 25.0), true),
            PressTarget::NewControl { .. }
        ));
        assert_eq!(
            resolve_press(&state, Vec2::new(150.0, 80.0), true),
            PressTarget::Empty
        );
    }
}
