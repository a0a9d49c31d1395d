//! Toolbar für Werkzeugauswahl und Zoom.

use crate::app::{AppIntent, AppState, ToolMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.active_tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            for (tool, shortcut) in [(ToolMode::Anchor, 1), (ToolMode::Control, 2)] {
                let label = format!("{} ({})", tool.label(), shortcut);
                if ui
                    .add(egui::Button::new(label).selected(active == tool))
                    .clicked()
                {
                    events.push(AppIntent::SetToolRequested { tool });
                }
            }

            ui.separator();

            let has_selection = state.selection.selected.is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("🗑 Löschen (Shift+Entf)"))
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested { modifier: true });
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⟲ Ansicht").on_hover_text("Feld einpassen").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                }
                if ui.button("＋").on_hover_text("Vergrößern").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                }
                ui.label(format!("{:.0} %", state.view.viewport.scale * 100.0));
                if ui.button("－").on_hover_text("Verkleinern").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                }
                ui.label("Zoom:");
            });
        });
    });

    events
}
