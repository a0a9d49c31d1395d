//! Führt Zeichenbefehle mit dem egui-Painter aus.

use super::types::{DrawCommand, Rgba};
use eframe::egui;
use glam::Vec2;

/// RGBA [0, 1] → egui-Farbe.
pub(crate) fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0].clamp(0.0, 1.0) * 255.0) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0) as u8,
        (color[3].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Zeichnet die Befehle in `rect`; Koordinaten sind relativ zu `rect.min`.
///
/// Ohne Textur wird `FieldImage` übersprungen.
pub fn paint(
    painter: &egui::Painter,
    rect: egui::Rect,
    commands: &[DrawCommand],
    field_texture: Option<egui::TextureId>,
) {
    let pos = |v: Vec2| egui::pos2(rect.min.x + v.x, rect.min.y + v.y);

    for command in commands {
        match command {
            DrawCommand::FieldImage { min, max } => {
                if let Some(texture_id) = field_texture {
                    painter.image(
                        texture_id,
                        egui::Rect::from_min_max(pos(*min), pos(*max)),
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
            }
            DrawCommand::FilledRect { min, max, color } => {
                painter.rect_filled(
                    egui::Rect::from_min_max(pos(*min), pos(*max)),
                    0.0,
                    to_color32(*color),
                );
            }
            DrawCommand::Polyline {
                points,
                width,
                color,
            } => {
                let points: Vec<egui::Pos2> = points.iter().map(|p| pos(*p)).collect();
                painter.add(egui::Shape::line(
                    points,
                    egui::Stroke::new(*width, to_color32(*color)),
                ));
            }
            DrawCommand::DashedPolyline {
                points,
                width,
                color,
                dash,
            } => {
                let points: Vec<egui::Pos2> = points.iter().map(|p| pos(*p)).collect();
                painter.extend(egui::Shape::dashed_line(
                    &points,
                    egui::Stroke::new(*width, to_color32(*color)),
                    dash[0],
                    dash[1],
                ));
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment(
                    [pos(*from), pos(*to)],
                    egui::Stroke::new(*width, to_color32(*color)),
                );
            }
            DrawCommand::Square {
                center,
                size,
                fill,
                outline,
            } => {
                let square = egui::Rect::from_center_size(pos(*center), egui::vec2(*size, *size));
                painter.rect_filled(square, 0.0, to_color32(*fill));
                if let Some((width, color)) = outline {
                    painter.rect_stroke(
                        square,
                        0.0,
                        egui::Stroke::new(*width, to_color32(*color)),
                        egui::StrokeKind::Middle,
                    );
                }
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => {
                painter.circle_filled(pos(*center), *radius, to_color32(*fill));
            }
        }
    }
}
