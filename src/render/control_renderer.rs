//! Steuerpunkte als farbige Kreise mit weißem Mittelpunkt.

use super::types::{DrawCommand, RenderContext, CONTROL_CENTER_COLOR};
use crate::core::{ControlPoint, SelectedPoint, Spline};

/// Konvertiert eine 8-Bit-Farbe in RGBA [0, 1].
fn rgb_to_rgba(rgb: [u8; 3]) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        1.0,
    ]
}

/// Hängt alle Steuerpunkte an ihrer Kurvenposition an die Zeichenliste.
pub(crate) fn push_controls(
    ctx: &RenderContext,
    spline: &Spline,
    controls: &[ControlPoint],
    selection: Option<SelectedPoint>,
    out: &mut Vec<DrawCommand>,
) {
    let options = ctx.options;
    for point in controls {
        let center = ctx.inch_to_screen(spline.point_at_u(point.u));
        let selected = selection == Some(SelectedPoint::Control(point.id));
        let (radius, center_radius) = if selected {
            (
                options.control_radius_selected,
                options.control_center_radius_selected,
            )
        } else {
            (options.control_radius, options.control_center_radius)
        };

        out.push(DrawCommand::Circle {
            center,
            radius: ctx.scaled(radius),
            fill: rgb_to_rgba(point.color.rgb()),
        });
        out.push(DrawCommand::Circle {
            center,
            radius: ctx.scaled(center_radius),
            fill: CONTROL_CENTER_COLOR,
        });
    }
}
