//! Listen-Panel (rechte Seitenleiste): Anker und Steuerpunkte zur Auswahl.

use super::properties::attribute_badge;
use crate::app::{AppIntent, AppState};
use crate::core::SelectedPoint;

/// Rendert Anker- und Steuerpunktliste und gibt erzeugte Events zurück.
pub fn render_point_lists(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let selected = state.selection.selected;

    egui::SidePanel::right("point_lists")
        .default_width(220.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Anker");
                for (index, anchor) in state.spline.anchors().iter().enumerate() {
                    let is_selected = selected.and_then(|s| s.anchor_index()) == Some(index);
                    let label = if anchor.name.is_empty() {
                        format!("Anker {}", index + 1)
                    } else {
                        format!("Anker {}: {}", index + 1, anchor.name)
                    };
                    if ui.selectable_label(is_selected, label).clicked() {
                        events.push(AppIntent::SelectPointRequested {
                            point: SelectedPoint::Anchor(index),
                        });
                    }
                }

                ui.separator();
                ui.heading("Steuerpunkte");

                if state.controls.is_empty() {
                    ui.small("Shift+Klick auf den Pfad im Steuerpunkt-Werkzeug");
                }

                for point in state.controls.sorted_by_u() {
                    let is_selected = selected == Some(SelectedPoint::Control(point.id));
                    ui.horizontal(|ui| {
                        let [r, g, b] = point.color.rgb();
                        ui.colored_label(egui::Color32::from_rgb(r, g, b), "●");

                        let name = if point.name.is_empty() {
                            format!("Steuerpunkt {}", point.id)
                        } else {
                            point.name.clone()
                        };
                        if ui
                            .selectable_label(is_selected, format!("{} (u {:.2})", name, point.u))
                            .clicked()
                        {
                            events.push(AppIntent::SelectPointRequested {
                                point: SelectedPoint::Control(point.id),
                            });
                        }

                        if ui.small_button("✕").on_hover_text("Löschen").clicked() {
                            events.push(AppIntent::DeleteControlPointRequested { id: point.id });
                        }
                    });

                    if !point.attributes.is_empty() {
                        ui.horizontal_wrapped(|ui| {
                            ui.add_space(16.0);
                            for attribute in &point.attributes {
                                ui.small(attribute_badge(attribute));
                            }
                        });
                    }
                }
            });
        });

    events
}
