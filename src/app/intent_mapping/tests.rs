use crate::app::state::{Interaction, ToolMode};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{AnchorPoint, AttributeKind, ControlPointAttribute, SelectedPoint, Spline, Viewport};
use glam::Vec2;

use super::map_intent_to_commands;

/// Zustand mit Identitäts-Viewport: Screen-Pixel entsprechen Canvas-Einheiten.
fn state_with_path() -> AppState {
    let mut state = AppState::new();
    state.spline = Spline::new(vec![
        AnchorPoint::straight(Vec2::new(0.0, 0.0)),
        AnchorPoint::straight(Vec2::new(100.0, 0.0)),
    ]);
    state.view.viewport = Viewport::new();
    state
}

#[test]
fn press_on_anchor_selects_and_begins_drag() {
    let state = state_with_path();
    let screen = state.view.inch_to_screen(Vec2::new(100.0, 0.0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: screen,
            modifier: false,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::SelectPoint {
            point: Some(SelectedPoint::Anchor(1))
        }
    ));
    assert!(matches!(
        commands[1],
        AppCommand::BeginDrag {
            target: SelectedPoint::Anchor(1)
        }
    ));
}

#[test]
fn press_on_empty_space_clears_selection_and_pans() {
    let state = state_with_path();
    let screen = state.view.inch_to_screen(Vec2::new(300.0, 200.0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: screen,
            modifier: false,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::SelectPoint { point: None }
    ));
    assert!(matches!(commands[1], AppCommand::BeginPan { .. }));
}

#[test]
fn press_with_modifier_far_from_curve_appends_anchor() {
    let state = state_with_path();
    let screen = state.view.inch_to_screen(Vec2::new(300.0, 200.0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: screen,
            modifier: true,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::AddAnchorAt { .. }));
}

#[test]
fn pointer_moved_while_idle_only_updates_cursor() {
    let state = state_with_path();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(10.0, 10.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::UpdateCursor { .. }));
}

#[test]
fn pointer_moved_while_panning_pans() {
    let mut state = state_with_path();
    state.interaction = Interaction::Panning {
        last_screen: Vec2::ZERO,
        viewport_before: state.view.viewport,
    };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(10.0, 10.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[1], AppCommand::PanTo { .. }));
}

#[test]
fn release_without_interaction_maps_to_nothing() {
    let state = state_with_path();
    assert!(map_intent_to_commands(&state, AppIntent::PointerReleased).is_empty());
}

#[test]
fn delete_requires_modifier_and_selection() {
    let mut state = state_with_path();

    assert!(
        map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested { modifier: true })
            .is_empty()
    );

    state.selection.selected = Some(SelectedPoint::Anchor(0));
    assert!(
        map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested { modifier: false })
            .is_empty()
    );

    let commands =
        map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested { modifier: true });
    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::DeleteSelected));
}

#[test]
fn selecting_control_from_list_switches_tool_first() {
    let state = state_with_path();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SelectPointRequested {
            point: SelectedPoint::Control(42),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::SetActiveTool {
            tool: ToolMode::Control
        }
    ));
    assert!(matches!(
        commands[1],
        AppCommand::SelectPoint {
            point: Some(SelectedPoint::Control(42))
        }
    ));
}

#[test]
fn add_attribute_uses_default_values_of_kind() {
    let state = state_with_path();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::AddAttributeRequested {
            id: 7,
            kind: AttributeKind::Stop,
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::AddAttribute { id, attribute } => {
            assert_eq!(*id, 7);
            assert!(matches!(attribute, ControlPointAttribute::Stop { .. }));
        }
        other => panic!("AddAttribute erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn viewport_resize_with_same_size_is_ignored() {
    let mut state = state_with_path();
    state.view.viewport_size = [800.0, 600.0];

    assert!(map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: [800.0, 600.0]
        }
    )
    .is_empty());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: [1024.0, 768.0],
        },
    );
    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SetViewportSize { .. }));
    assert!(matches!(commands[1], AppCommand::ResetView));
}

#[test]
fn zoom_buttons_map_to_signed_delta() {
    let state = state_with_path();

    let zoom_in = map_intent_to_commands(&state, AppIntent::ZoomInRequested);
    let zoom_out = map_intent_to_commands(&state, AppIntent::ZoomOutRequested);

    assert!(matches!(
        zoom_in[0],
        AppCommand::ZoomAt { delta, focal: None } if delta > 0.0
    ));
    assert!(matches!(
        zoom_out[0],
        AppCommand::ZoomAt { delta, focal: None } if delta < 0.0
    ));
}

#[test]
fn press_during_open_interaction_ends_it_first() {
    let mut state = state_with_path();
    state.interaction = Interaction::Panning {
        last_screen: Vec2::ZERO,
        viewport_before: state.view.viewport,
    };
    let screen = state.view.inch_to_screen(Vec2::new(100.0, 0.0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: screen,
            modifier: false,
        },
    );

    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], AppCommand::EndInteraction));
    assert!(matches!(
        commands[2],
        AppCommand::BeginDrag {
            target: SelectedPoint::Anchor(1)
        }
    ));
}
