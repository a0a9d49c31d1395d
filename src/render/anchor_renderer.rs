//! Anker-Quadrate und Handles des ausgewählten Kurvenankers.

use super::types::{DrawCommand, RenderContext, HANDLE_LINE_WIDTH, SELECTION_OUTLINE_WIDTH};
use crate::core::{SelectedPoint, Spline};

/// Hängt Handles (nur ausgewählter Kurvenanker) und alle Anker an die Zeichenliste.
pub(crate) fn push_anchors(
    ctx: &RenderContext,
    spline: &Spline,
    selection: Option<SelectedPoint>,
    out: &mut Vec<DrawCommand>,
) {
    let options = ctx.options;
    let selected_index = selection.and_then(SelectedPoint::anchor_index);

    for (index, anchor) in spline.anchors().iter().enumerate() {
        let center = ctx.inch_to_screen(anchor.position);

        if anchor.is_curved && selected_index == Some(index) {
            let handle_out = ctx.inch_to_screen(anchor.handle_out());
            let handle_in = ctx.inch_to_screen(anchor.handle_in());
            let line_width = ctx.scaled(HANDLE_LINE_WIDTH);

            for to in [handle_out, handle_in] {
                out.push(DrawCommand::Line {
                    from: center,
                    to,
                    width: line_width,
                    color: options.handle_line_color,
                });
            }

            let handle_color = |active: bool| {
                if active {
                    options.handle_active_color
                } else {
                    options.handle_inactive_color
                }
            };
            out.push(DrawCommand::Circle {
                center: handle_out,
                radius: ctx.scaled(options.handle_radius),
                fill: handle_color(selection == Some(SelectedPoint::HandleOut(index))),
            });
            out.push(DrawCommand::Circle {
                center: handle_in,
                radius: ctx.scaled(options.handle_radius),
                fill: handle_color(selection == Some(SelectedPoint::HandleIn(index))),
            });
        }

        let outline = (selection == Some(SelectedPoint::Anchor(index))).then(|| {
            (
                ctx.scaled(SELECTION_OUTLINE_WIDTH),
                options.selection_highlight_color,
            )
        });
        out.push(DrawCommand::Square {
            center,
            size: ctx.scaled(options.anchor_size),
            fill: options.anchor_color,
            outline,
        });
    }
}
