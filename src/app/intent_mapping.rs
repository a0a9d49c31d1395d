//! Mapping von UI-Intents auf mutierende App-Commands.

use super::hit_test::{self, PressTarget};
use super::state::{Interaction, ToolMode};
use super::{AppCommand, AppIntent, AppState};
use crate::core::SelectedPoint;
use crate::shared::EditorOptions;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            screen_pos,
            modifier,
        } => {
            let inch = state.view.screen_to_inch(screen_pos);
            // Offene Interaktion ohne Loslassen zuerst abschließen
            let mut commands = if state.interaction.is_idle() {
                vec![]
            } else {
                vec![AppCommand::EndInteraction]
            };
            commands.extend(match hit_test::resolve_press(state, inch, modifier) {
                PressTarget::Grab(target) => vec![
                    AppCommand::SelectPoint {
                        point: Some(target),
                    },
                    AppCommand::BeginDrag { target },
                ],
                PressTarget::InsertOnCurve { segment, t } => {
                    vec![AppCommand::InsertAnchorOnCurve { segment, t }]
                }
                PressTarget::AppendAnchor { position } => {
                    vec![AppCommand::AddAnchorAt { position }]
                }
                PressTarget::NewControl { u } => vec![AppCommand::AddControlPointAt { u }],
                PressTarget::Empty => vec![
                    AppCommand::SelectPoint { point: None },
                    AppCommand::BeginPan { screen_pos },
                ],
            });
            commands
        }
        AppIntent::PointerMoved { screen_pos } => {
            let mut commands = vec![AppCommand::UpdateCursor { screen_pos }];
            match state.interaction {
                Interaction::Panning { .. } => commands.push(AppCommand::PanTo { screen_pos }),
                Interaction::Dragging { .. } => commands.push(AppCommand::DragTo {
                    position: state.view.screen_to_inch(screen_pos),
                }),
                Interaction::Idle => {}
            }
            commands
        }
        AppIntent::PointerReleased => {
            if state.interaction.is_idle() {
                vec![]
            } else {
                vec![AppCommand::EndInteraction]
            }
        }
        AppIntent::CancelRequested => vec![AppCommand::CancelInteraction],

        AppIntent::ZoomRequested { delta, focal } => vec![AppCommand::ZoomAt { delta, focal }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomAt {
            delta: 1.0,
            focal: None,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomAt {
            delta: -1.0,
            focal: None,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ViewportResized { size } => {
            if size == state.view.viewport_size {
                vec![]
            } else {
                vec![
                    AppCommand::SetViewportSize { size },
                    AppCommand::ResetView,
                ]
            }
        }

        AppIntent::SetToolRequested { tool } => vec![AppCommand::SetActiveTool { tool }],
        AppIntent::SelectPointRequested { point } => {
            let tool = match point {
                SelectedPoint::Control(_) => ToolMode::Control,
                _ => ToolMode::Anchor,
            };
            vec![
                AppCommand::SetActiveTool { tool },
                AppCommand::SelectPoint { point: Some(point) },
            ]
        }
        AppIntent::DeleteSelectedRequested { modifier } => {
            if modifier && state.selection.selected.is_some() {
                vec![AppCommand::DeleteSelected]
            } else {
                vec![]
            }
        }

        AppIntent::DeleteAnchorRequested { index } => vec![AppCommand::DeleteAnchor { index }],
        AppIntent::AnchorEditRequested { index, edit } => {
            vec![AppCommand::UpdateAnchor { index, edit }]
        }
        AppIntent::ToggleAnchorCurveRequested { index } => {
            vec![AppCommand::ToggleAnchorCurve { index }]
        }

        AppIntent::ControlPointEditRequested { id, update } => {
            vec![AppCommand::UpdateControlPoint { id, update }]
        }
        AppIntent::DeleteControlPointRequested { id } => {
            vec![AppCommand::DeleteControlPoint { id }]
        }
        AppIntent::AddAttributeRequested { id, kind } => vec![AppCommand::AddAttribute {
            id,
            attribute: kind.default_attribute(),
        }],
        AppIntent::AttributeEditRequested { id, index, update } => {
            vec![AppCommand::UpdateAttribute { id, index, update }]
        }
        AppIntent::RemoveAttributeRequested { id, index } => {
            vec![AppCommand::RemoveAttribute { id, index }]
        }

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::FieldImageSelectionRequested => vec![AppCommand::RequestFieldImageDialog],
        AppIntent::FieldImageSelected { path } => vec![AppCommand::LoadFieldImage { path }],
        AppIntent::LoadRoutineRequested { routine } => vec![AppCommand::LoadRoutine { routine }],
        AppIntent::SyncRoutineRequested => vec![AppCommand::SyncRoutine],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ApplyOptions {
            options: Box::new(EditorOptions::default()),
        }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
