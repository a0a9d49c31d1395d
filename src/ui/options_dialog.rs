//! Optionen-Dialog für Trefferradien, Zoom, Farben, Größen und das Feld.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Treffer ─────────────────────────────────────
                    ui.collapsing("Treffer (Zoll)", |ui| {
                        changed |= drag_value(ui, "Punkt-Radius:", &mut opts.point_hit_radius, 1.0..=30.0, 0.1);
                        changed |= drag_value(ui, "Kurven-Suchradius:", &mut opts.curve_search_radius, 1.0..=100.0, 0.5);
                        changed |= drag_value(ui, "Einfüge-Radius:", &mut opts.curve_insert_radius, 1.0..=50.0, 0.5);
                        ui.horizontal(|ui| {
                            ui.label("Suchschritte/Segment:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.curve_search_steps)
                                        .range(10..=1000),
                                )
                                .changed();
                        });
                    });

                    // ── Anker ───────────────────────────────────────
                    ui.collapsing("Anker", |ui| {
                        changed |= drag_value(ui, "Größe:", &mut opts.anchor_size, 2.0..=40.0, 0.1);
                        changed |= drag_value(ui, "Handle neu:", &mut opts.new_anchor_handle_length, 1.0..=100.0, 0.5);
                        changed |= drag_value(ui, "Handle Kurve:", &mut opts.curve_toggle_handle_length, 1.0..=100.0, 0.5);
                        changed |= drag_value(ui, "Handle-Radius:", &mut opts.handle_radius, 1.0..=20.0, 0.1);
                        changed |= color_edit(ui, "Farbe:", &mut opts.anchor_color);
                        changed |= color_edit(ui, "Auswahl-Rahmen:", &mut opts.selection_highlight_color);
                        changed |= color_edit(ui, "Handle-Linie:", &mut opts.handle_line_color);
                        changed |= color_edit(ui, "Handle aktiv:", &mut opts.handle_active_color);
                        changed |= color_edit(ui, "Handle inaktiv:", &mut opts.handle_inactive_color);
                    });

                    // ── Pfad ────────────────────────────────────────
                    ui.collapsing("Pfad", |ui| {
                        changed |= drag_value(ui, "Breite:", &mut opts.path_width, 0.5..=20.0, 0.1);
                        changed |= drag_value(ui, "Breite Strichlinie:", &mut opts.path_dash_width, 0.5..=20.0, 0.1);
                        changed |= drag_value(ui, "Strich:", &mut opts.path_dash_pattern[0], 1.0..=50.0, 0.5);
                        changed |= drag_value(ui, "Lücke:", &mut opts.path_dash_pattern[1], 1.0..=50.0, 0.5);
                        changed |= drag_value(ui, "Deckkraft Strichlinie:", &mut opts.path_dash_alpha, 0.0..=1.0, 0.01);
                        changed |= color_edit(ui, "Farbe:", &mut opts.path_color);
                    });

                    // ── Steuerpunkte ────────────────────────────────
                    ui.collapsing("Steuerpunkte", |ui| {
                        changed |= drag_value(ui, "Radius:", &mut opts.control_radius, 1.0..=20.0, 0.1);
                        changed |= drag_value(ui, "Radius ausgewählt:", &mut opts.control_radius_selected, 1.0..=20.0, 0.1);
                        changed |= drag_value(ui, "Mittelpunkt:", &mut opts.control_center_radius, 0.5..=10.0, 0.1);
                        changed |= drag_value(ui, "Mittelpunkt ausgewählt:", &mut opts.control_center_radius_selected, 0.5..=10.0, 0.1);
                    });

                    // ── Zoom ────────────────────────────────────────
                    ui.collapsing("Zoom", |ui| {
                        changed |= drag_value(ui, "Faktor hinein:", &mut opts.zoom_in_factor, 1.001..=2.0, 0.005);
                        changed |= drag_value(ui, "Faktor heraus:", &mut opts.zoom_out_factor, 0.5..=0.999, 0.005);
                        changed |= drag_value(ui, "Minimum:", &mut opts.zoom_min, 0.05..=1.0, 0.01);
                        changed |= drag_value(ui, "Maximum:", &mut opts.zoom_max, 1.0..=20.0, 0.1);
                    });

                    // ── Feld ────────────────────────────────────────
                    ui.collapsing("Feld", |ui| {
                        changed |= drag_value(ui, "Breite:", &mut opts.field.width, 100.0..=5000.0, 1.0);
                        changed |= drag_value(ui, "Höhe:", &mut opts.field.height, 100.0..=5000.0, 1.0);
                        changed |= color_edit(ui, "Platzhalter:", &mut opts.field_placeholder_color);
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.canvas_background_color);

                        ui.separator();
                        ui.label("Referenzpunkte (Canvas ↔ Zoll)");
                        let refs = &mut opts.reference_pairs;
                        changed |= pair_edit(ui, "Canvas 1:", &mut refs.canvas_1);
                        changed |= pair_edit(ui, "Zoll 1:", &mut refs.inch_1);
                        changed |= pair_edit(ui, "Canvas 2:", &mut refs.canvas_2);
                        changed |= pair_edit(ui, "Zoll 2:", &mut refs.inch_2);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Beschriftetes DragValue für einen f32-Wert.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Editor für ein Koordinatenpaar.
fn pair_edit(ui: &mut egui::Ui, label: &str, pair: &mut [f32; 2]) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let x = ui
            .add(egui::DragValue::new(&mut pair[0]).speed(0.5).fixed_decimals(2))
            .changed();
        let y = ui
            .add(egui::DragValue::new(&mut pair[1]).speed(0.5).fixed_decimals(2))
            .changed();
        x || y
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                a as f32 / 255.0,
            ];
            changed = true;
        }
    });
    changed
}
