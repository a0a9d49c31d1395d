//! Top-Menü (Datei, Bearbeiten, Ansicht, Optionen).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                let image_label = if state.view.field_image.is_some() {
                    "Feldbild ändern..."
                } else {
                    "Feldbild laden..."
                };
                if ui.button(image_label).clicked() {
                    events.push(AppIntent::FieldImageSelectionRequested);
                    ui.close();
                }

                ui.separator();

                let has_routine = state.routine.is_some();
                if ui
                    .add_enabled(has_routine, egui::Button::new("Routine übernehmen"))
                    .on_hover_text("Pfad und Steuerpunkte in die Routine schreiben")
                    .clicked()
                {
                    events.push(AppIntent::SyncRoutineRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                let can_undo = state.can_undo();
                let can_redo = state.can_redo();

                if ui
                    .add_enabled(can_undo, egui::Button::new("Rückgängig (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(can_redo, egui::Button::new("Wiederholen (Ctrl+Y)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Feld einpassen").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                if ui.button("Vergrößern").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Verkleinern").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });

            ui.menu_button("Optionen", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                    ui.close();
                }
            });

            ui.menu_button("Hilfe", |ui| {
                if ui.button("Über").clicked() {
                    log::info!("Auto-Routine-Studio v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
