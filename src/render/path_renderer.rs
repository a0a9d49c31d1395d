//! Pfad: durchgezogene Linie plus gestrichelte Überlagerung.

use super::types::{with_alpha, DrawCommand, RenderContext};
use crate::core::Spline;
use glam::Vec2;

/// Tastet alle Segmente ab und liefert den Linienzug in Screen-Pixeln.
///
/// Gemeinsame Segmentgrenzen werden nur einmal aufgenommen.
pub(crate) fn sample_path(ctx: &RenderContext, spline: &Spline) -> Vec<Vec2> {
    let samples = ctx.options.path_samples_per_segment.max(1);
    let segment_count = spline.segment_count();
    let mut points = Vec::with_capacity(segment_count * samples + 1);

    for segment in 0..segment_count {
        let first = if segment == 0 { 0 } else { 1 };
        for step in first..=samples {
            let u = segment as f32 + step as f32 / samples as f32;
            points.push(ctx.inch_to_screen(spline.point_at_u(u)));
        }
    }
    points
}

/// Hängt den Pfad an die Zeichenliste (nichts bei weniger als zwei Ankern).
pub(crate) fn push_path(ctx: &RenderContext, spline: &Spline, out: &mut Vec<DrawCommand>) {
    if spline.segment_count() == 0 {
        return;
    }
    let options = ctx.options;
    let points = sample_path(ctx, spline);

    out.push(DrawCommand::Polyline {
        points: points.clone(),
        width: ctx.scaled(options.path_width),
        color: options.path_color,
    });
    out.push(DrawCommand::DashedPolyline {
        points,
        width: ctx.scaled(options.path_dash_width),
        color: with_alpha(options.path_color, options.path_dash_alpha),
        dash: [
            ctx.scaled(options.path_dash_pattern[0]),
            ctx.scaled(options.path_dash_pattern[1]),
        ],
    });
}
