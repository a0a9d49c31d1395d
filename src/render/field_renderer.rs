//! Feldbild oder Platzhalter-Rechteck.

use super::types::{DrawCommand, RenderContext};
use crate::shared::RenderScene;
use glam::Vec2;

/// Hängt das Feld (Bild oder Platzhalter) an die Zeichenliste.
pub(crate) fn push_field(ctx: &RenderContext, scene: &RenderScene, out: &mut Vec<DrawCommand>) {
    let min = ctx.canvas_to_screen(Vec2::ZERO);
    let max = ctx.canvas_to_screen(scene.field.size());

    if scene.has_field_image {
        out.push(DrawCommand::FieldImage { min, max });
    } else {
        out.push(DrawCommand::FilledRect {
            min,
            max,
            color: ctx.options.field_placeholder_color,
        });
    }
}
