//! Properties-Panel (linke Seitenleiste) für Anker- und Steuerpunkt-Eigenschaften.

use crate::app::{AnchorEdit, AppIntent, AppState};
use crate::core::{
    AnchorPoint, AttributeKind, AttributeUpdate, ControlPoint, ControlPointAttribute,
    ControlPointColor, ControlPointUpdate, SelectedPoint,
};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("properties_panel")
        .default_width(240.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            match state.selection.selected {
                None => {
                    ui.label("Keine Auswahl");
                    ui.small("Shift+Klick setzt Anker bzw. Steuerpunkte.");
                }
                Some(SelectedPoint::Control(id)) => match state.controls.get(id) {
                    Some(point) => render_control_point(ui, state, point, &mut events),
                    None => {
                        ui.label("Steuerpunkt nicht gefunden");
                    }
                },
                Some(selected) => {
                    let index = selected.anchor_index().unwrap_or_default();
                    match state.spline.anchor(index) {
                        Some(anchor) => {
                            render_anchor(ui, state, index, anchor, selected, &mut events)
                        }
                        None => {
                            ui.label("Anker nicht gefunden");
                        }
                    }
                }
            }
        });

    events
}

fn render_anchor(
    ui: &mut egui::Ui,
    state: &AppState,
    index: usize,
    anchor: &AnchorPoint,
    selected: SelectedPoint,
    events: &mut Vec<AppIntent>,
) {
    ui.label(format!("Anker {}", index + 1));
    match selected {
        SelectedPoint::HandleOut(_) => ui.small("Ausgehendes Handle wird bearbeitet"),
        SelectedPoint::HandleIn(_) => ui.small("Eingehendes Handle wird bearbeitet"),
        _ => ui.small(""),
    };

    ui.horizontal(|ui| {
        ui.label("Name:");
        let mut name = anchor.name.clone();
        if ui.text_edit_singleline(&mut name).changed() {
            events.push(AppIntent::AnchorEditRequested {
                index,
                edit: AnchorEdit {
                    name: Some(name),
                    ..Default::default()
                },
            });
        }
    });

    let mut position = anchor.position;
    let mut moved = false;
    ui.horizontal(|ui| {
        ui.label("X (in):");
        moved |= ui
            .add(egui::DragValue::new(&mut position.x).speed(0.5).fixed_decimals(2))
            .changed();
        ui.label("Y (in):");
        moved |= ui
            .add(egui::DragValue::new(&mut position.y).speed(0.5).fixed_decimals(2))
            .changed();
    });
    if moved {
        events.push(AppIntent::AnchorEditRequested {
            index,
            edit: AnchorEdit {
                position: Some(position),
                ..Default::default()
            },
        });
    }

    let mut curved = anchor.is_curved;
    if ui.checkbox(&mut curved, "Kurve").changed() {
        events.push(AppIntent::ToggleAnchorCurveRequested { index });
    }

    if anchor.is_curved {
        ui.label(format!(
            "Handle ein: ({:.1}, {:.1})",
            anchor.handle_in_offset.x, anchor.handle_in_offset.y
        ));
        ui.label(format!(
            "Handle aus: ({:.1}, {:.1})",
            anchor.handle_out_offset.x, anchor.handle_out_offset.y
        ));
    }

    ui.separator();
    let can_delete = state.anchor_count() > crate::app::use_cases::editing::MIN_ANCHORS;
    if ui
        .add_enabled(can_delete, egui::Button::new("✕ Anker löschen"))
        .on_disabled_hover_text("Ein Pfad braucht mindestens zwei Anker")
        .clicked()
    {
        events.push(AppIntent::DeleteAnchorRequested { index });
    }
}

fn render_control_point(
    ui: &mut egui::Ui,
    state: &AppState,
    point: &ControlPoint,
    events: &mut Vec<AppIntent>,
) {
    let id = point.id;
    ui.label(format!("Steuerpunkt {}", id));

    ui.horizontal(|ui| {
        ui.label("Name:");
        let mut name = point.name.clone();
        if ui.text_edit_singleline(&mut name).changed() {
            events.push(AppIntent::ControlPointEditRequested {
                id,
                update: ControlPointUpdate {
                    name: Some(name),
                    ..Default::default()
                },
            });
        }
    });

    ui.horizontal(|ui| {
        ui.label("u:");
        let mut u = point.u;
        let max_u = state.spline.segment_count() as f32;
        if ui
            .add(
                egui::DragValue::new(&mut u)
                    .range(0.0..=max_u)
                    .speed(0.005)
                    .fixed_decimals(3),
            )
            .changed()
        {
            events.push(AppIntent::ControlPointEditRequested {
                id,
                update: ControlPointUpdate {
                    u: Some(u),
                    ..Default::default()
                },
            });
        }
    });

    ui.horizontal(|ui| {
        ui.label("Farbe:");
        let mut color = point.color;
        egui::ComboBox::from_id_salt(format!("control_color_{}", id))
            .selected_text(color.label())
            .show_ui(ui, |ui| {
                for option in ControlPointColor::ALL {
                    ui.selectable_value(&mut color, option, option.label());
                }
            });
        if color != point.color {
            events.push(AppIntent::ControlPointEditRequested {
                id,
                update: ControlPointUpdate {
                    color: Some(color),
                    ..Default::default()
                },
            });
        }
    });

    ui.separator();
    ui.label("Attribute");

    for (index, attribute) in point.attributes.iter().enumerate() {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong(attribute.kind().label());
                if ui.small_button("✕").clicked() {
                    events.push(AppIntent::RemoveAttributeRequested { id, index });
                }
            });
            if let Some(update) = render_attribute_editor(ui, state, id, index, attribute) {
                events.push(AppIntent::AttributeEditRequested { id, index, update });
            }
        });
    }

    let missing = point.missing_attribute_kinds();
    ui.add_enabled_ui(!missing.is_empty(), |ui| {
        ui.menu_button("+ Attribut hinzufügen", |ui| {
            for kind in missing {
                if ui.button(kind.label()).clicked() {
                    events.push(AppIntent::AddAttributeRequested { id, kind });
                    ui.close();
                }
            }
        });
    });

    ui.separator();
    if ui.button("✕ Steuerpunkt löschen").clicked() {
        events.push(AppIntent::DeleteControlPointRequested { id });
    }
}

/// Editor für ein einzelnes Attribut; liefert die Änderung, falls vorhanden.
fn render_attribute_editor(
    ui: &mut egui::Ui,
    state: &AppState,
    id: u64,
    index: usize,
    attribute: &ControlPointAttribute,
) -> Option<AttributeUpdate> {
    match attribute {
        ControlPointAttribute::Stop { duration } => {
            let mut value = *duration;
            ui.horizontal(|ui| {
                ui.label("Dauer (s):");
                ui.add(egui::DragValue::new(&mut value).range(0.0..=15.0).speed(0.05))
                    .changed()
            })
            .inner
            .then(|| AttributeUpdate {
                duration: Some(value),
                ..Default::default()
            })
        }
        ControlPointAttribute::Rotate { heading } => {
            let mut value = *heading;
            ui.horizontal(|ui| {
                ui.label("Richtung (°):");
                ui.add(
                    egui::DragValue::new(&mut value)
                        .range(-180.0..=360.0)
                        .speed(1.0),
                )
                .changed()
            })
            .inner
            .then(|| AttributeUpdate {
                heading: Some(value),
                ..Default::default()
            })
        }
        ControlPointAttribute::Command { action } => {
            let mut value = action.clone();
            ui.horizontal(|ui| {
                ui.label("Befehl:");
                ui.text_edit_singleline(&mut value).changed()
            })
            .inner
            .then(|| AttributeUpdate {
                action: Some(value),
                ..Default::default()
            })
        }
        ControlPointAttribute::Loop {
            bounces,
            target_loop_id,
        } => {
            let mut update = AttributeUpdate::default();

            let mut value = *bounces;
            ui.horizontal(|ui| {
                ui.label("Wiederholungen:");
                if ui
                    .add(egui::DragValue::new(&mut value).range(0..=20))
                    .changed()
                {
                    update.bounces = Some(value);
                }
            });

            let mut target = *target_loop_id;
            let target_label =
                |target: Option<u64>| match target.and_then(|t| state.controls.get(t)) {
                    Some(point) if !point.name.is_empty() => point.name.clone(),
                    Some(point) => format!("Steuerpunkt {}", point.id),
                    None => "keins".to_string(),
                };
            ui.horizontal(|ui| {
                ui.label("Ziel:");
                egui::ComboBox::from_id_salt(format!("loop_target_{}_{}", id, index))
                    .selected_text(target_label(target))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut target, None, "keins");
                        for candidate in state.controls.sorted_by_u() {
                            if candidate.id != id {
                                ui.selectable_value(
                                    &mut target,
                                    Some(candidate.id),
                                    target_label(Some(candidate.id)),
                                );
                            }
                        }
                    });
            });
            if target != *target_loop_id {
                update.target_loop_id = Some(target);
            }

            (update != AttributeUpdate::default()).then_some(update)
        }
    }
}

/// Kurzbezeichnung eines Attributs für Listen-Badges.
pub(super) fn attribute_badge(attribute: &ControlPointAttribute) -> String {
    match attribute {
        ControlPointAttribute::Stop { duration } => format!("Stopp {:.1}s", duration),
        ControlPointAttribute::Rotate { heading } => format!("Drehen {:.0}°", heading),
        ControlPointAttribute::Command { action } if action.is_empty() => {
            AttributeKind::Command.label().to_string()
        }
        ControlPointAttribute::Command { action } => action.clone(),
        ControlPointAttribute::Loop { bounces, .. } => format!("Schleife ×{}", bounces),
    }
}
