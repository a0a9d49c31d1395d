//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Interaktion ===
            AppCommand::SetActiveTool { tool } => {
                handlers::interaction::set_active_tool(state, tool)
            }
            AppCommand::SelectPoint { point } => handlers::interaction::select_point(state, point),
            AppCommand::BeginDrag { target } => handlers::interaction::begin_drag(state, target),
            AppCommand::BeginPan { screen_pos } => handlers::view::begin_pan(state, screen_pos),
            AppCommand::UpdateCursor { screen_pos } => {
                handlers::interaction::update_cursor(state, screen_pos)
            }
            AppCommand::PanTo { screen_pos } => handlers::view::pan_to(state, screen_pos),
            AppCommand::DragTo { position } => handlers::interaction::drag_to(state, position),
            AppCommand::EndInteraction => handlers::interaction::end(state),
            AppCommand::CancelInteraction => handlers::interaction::cancel(state),
            AppCommand::DeleteSelected => handlers::interaction::delete_selected(state),

            // === Anker ===
            AppCommand::AddAnchorAt { position } => handlers::editing::add_anchor(state, position),
            AppCommand::InsertAnchorOnCurve { segment, t } => {
                handlers::editing::insert_anchor(state, segment, t)?
            }
            AppCommand::DeleteAnchor { index } => handlers::editing::delete_anchor(state, index),
            AppCommand::UpdateAnchor { index, edit } => {
                handlers::editing::update_anchor(state, index, edit)
            }
            AppCommand::ToggleAnchorCurve { index } => {
                handlers::editing::toggle_anchor_curve(state, index)
            }

            // === Steuerpunkte ===
            AppCommand::AddControlPointAt { u } => handlers::editing::add_control_point(state, u),
            AppCommand::UpdateControlPoint { id, update } => {
                handlers::editing::update_control_point(state, id, update)
            }
            AppCommand::DeleteControlPoint { id } => {
                handlers::editing::delete_control_point(state, id)
            }
            AppCommand::AddAttribute { id, attribute } => {
                handlers::editing::add_attribute(state, id, attribute)?
            }
            AppCommand::UpdateAttribute { id, index, update } => {
                handlers::editing::update_attribute(state, id, index, update)
            }
            AppCommand::RemoveAttribute { id, index } => {
                handlers::editing::remove_attribute(state, id, index)
            }

            // === Viewport ===
            AppCommand::ZoomAt { delta, focal } => handlers::view::zoom_at(state, delta, focal),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Feldbild & Routine ===
            AppCommand::RequestFieldImageDialog => {
                handlers::dialog::request_field_image_dialog(state)
            }
            AppCommand::LoadFieldImage { path } => handlers::project::load_field_image(state, path)?,
            AppCommand::LoadRoutine { routine } => handlers::project::load_routine(state, *routine),
            AppCommand::SyncRoutine => handlers::project::sync_routine(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
