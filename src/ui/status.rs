//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::SelectedPoint;

/// Anzeigename eines ausgewählten Punkts.
fn selection_label(state: &AppState, selected: SelectedPoint) -> String {
    match selected {
        SelectedPoint::Anchor(index) => format!("Anker {}", index + 1),
        SelectedPoint::HandleOut(index) => format!("Anker {} (Handle aus)", index + 1),
        SelectedPoint::HandleIn(index) => format!("Anker {} (Handle ein)", index + 1),
        SelectedPoint::Control(id) => match state.controls.get(id) {
            Some(point) if !point.name.is_empty() => point.name.clone(),
            _ => format!("Steuerpunkt {}", id),
        },
    }
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match &state.routine {
                Some(routine) => {
                    let dirty = if routine.is_dirty { " *" } else { "" };
                    ui.label(format!("Routine: {}{}", routine.name, dirty));
                }
                None => {
                    ui.label("Keine Routine geladen");
                }
            }

            ui.separator();

            ui.label(format!(
                "Anker: {} | Steuerpunkte: {}",
                state.anchor_count(),
                state.control_count()
            ));

            ui.separator();

            let cursor = state.view.cursor_inch;
            ui.label(format!(
                "Zoom: {:.0} % | Cursor: ({:.1} in, {:.1} in)",
                state.view.viewport.scale * 100.0,
                cursor.x,
                cursor.y
            ));

            ui.separator();

            match state.selection.selected {
                Some(selected) => {
                    ui.label(format!("Auswahl: {}", selection_label(state, selected)));
                }
                None => {
                    ui.label("Auswahl: keine");
                }
            }

            ui.separator();
            ui.label(format!("Werkzeug: {}", state.editor.active_tool.label()));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
