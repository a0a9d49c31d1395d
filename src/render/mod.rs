//! Rendering mit dem egui-Painter.
//!
//! Aus der [`RenderScene`] entsteht zuerst eine Liste von Zeichenbefehlen in
//! Screen-Pixeln ([`build_draw_list`], ohne egui testbar), die [`Renderer`]
//! anschließend ausführt.

mod anchor_renderer;
mod control_renderer;
mod field_renderer;
mod painter;
mod path_renderer;
mod texture;
mod types;

pub use crate::shared::RenderScene;
pub use painter::paint;
pub use types::{DrawCommand, Rgba};

use crate::core::FieldImage;
use eframe::egui;
use types::RenderContext;

/// Baut die Zeichenliste eines Frames.
///
/// Reihenfolge: Feld, Pfad, Handles und Anker, Steuerpunkte (zuoberst).
pub fn build_draw_list(scene: &RenderScene) -> Vec<DrawCommand> {
    let ctx = RenderContext {
        viewport: scene.viewport,
        mapping: scene.mapping,
        options: &scene.options,
    };
    let mut commands = Vec::new();

    field_renderer::push_field(&ctx, scene, &mut commands);
    path_renderer::push_path(&ctx, &scene.spline, &mut commands);
    anchor_renderer::push_anchors(&ctx, &scene.spline, scene.selection, &mut commands);
    control_renderer::push_controls(
        &ctx,
        &scene.spline,
        &scene.controls,
        scene.selection,
        &mut commands,
    );

    commands
}

/// Renderer für die Zeichenfläche.
///
/// Hält die Feldbild-Textur; alles andere wird pro Frame neu gebaut.
#[derive(Default)]
pub struct Renderer {
    field_texture: Option<egui::TextureHandle>,
}

impl Renderer {
    /// Erstellt einen Renderer ohne Feldbild.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet die komplette Szene in `rect`.
    pub fn render_scene(&self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        painter.rect_filled(
            rect,
            0.0,
            painter::to_color32(scene.options.canvas_background_color),
        );

        let commands = build_draw_list(scene);
        log::trace!("Zeichne {} Befehle", commands.len());
        paint(
            &painter.with_clip_rect(rect),
            rect,
            &commands,
            self.field_texture.as_ref().map(egui::TextureHandle::id),
        );
    }

    /// Setzt das Feldbild.
    pub fn set_field_image(&mut self, ctx: &egui::Context, image: &FieldImage) {
        self.field_texture = Some(texture::create_texture_from_field_image(ctx, image));
    }

    /// Entfernt das Feldbild.
    pub fn clear_field_image(&mut self) {
        self.field_texture = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        AnchorPoint, ControlPoint, ControlPointColor, FieldConfig, FieldMapping, SelectedPoint,
        Spline, Viewport,
    };
    use crate::shared::EditorOptions;
    use glam::Vec2;

    fn scene(selection: Option<SelectedPoint>) -> RenderScene {
        RenderScene {
            spline: Spline::new(vec![
                AnchorPoint::straight(Vec2::new(0.0, 0.0)),
                AnchorPoint::curved(Vec2::new(100.0, 50.0), 20.0),
                AnchorPoint::straight(Vec2::new(200.0, 0.0)),
            ]),
            controls: vec![ControlPoint::new(1, 0.5, ControlPointColor::Red)],
            viewport: Viewport {
                scale: 2.0,
                offset: Vec2::new(10.0, 20.0),
            },
            viewport_size: [800.0, 600.0],
            mapping: FieldMapping::default(),
            field: FieldConfig::default(),
            selection,
            has_field_image: false,
            options: EditorOptions::default(),
        }
    }

    fn count(commands: &[DrawCommand], pred: impl Fn(&DrawCommand) -> bool) -> usize {
        commands.iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn ohne_feldbild_wird_platzhalter_gezeichnet() {
        let commands = build_draw_list(&scene(None));

        match &commands[0] {
            DrawCommand::FilledRect { min, max, .. } => {
                assert_eq!(*min, Vec2::new(10.0, 20.0));
                assert_eq!(*max, Vec2::new(10.0 + 1314.0 * 2.0, 20.0 + 732.0 * 2.0));
            }
            other => panic!("Platzhalter erwartet, erhalten: {other:?}"),
        }

        let mut with_image = scene(None);
        with_image.has_field_image = true;
        assert!(matches!(
            build_draw_list(&with_image)[0],
            DrawCommand::FieldImage { .. }
        ));
    }

    #[test]
    fn pfad_hat_linie_und_strichelung_in_zoom_skalierter_breite() {
        let commands = build_draw_list(&scene(None));

        let solid = commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Polyline { points, width, .. } => Some((points.len(), *width)),
                _ => None,
            })
            .expect("Pfadlinie vorhanden");
        assert_eq!(solid.0, 2 * 32 + 1);
        assert_eq!(solid.1, 8.0);

        assert_eq!(
            count(&commands, |c| matches!(c, DrawCommand::DashedPolyline { .. })),
            1
        );
    }

    #[test]
    fn handles_nur_fuer_ausgewaehlten_kurvenanker() {
        let none = build_draw_list(&scene(None));
        assert_eq!(count(&none, |c| matches!(c, DrawCommand::Line { .. })), 0);

        let straight = build_draw_list(&scene(Some(SelectedPoint::Anchor(0))));
        assert_eq!(count(&straight, |c| matches!(c, DrawCommand::Line { .. })), 0);

        let curved = build_draw_list(&scene(Some(SelectedPoint::HandleIn(1))));
        assert_eq!(count(&curved, |c| matches!(c, DrawCommand::Line { .. })), 2);
    }

    #[test]
    fn ausgewaehlter_anker_hat_umrandung() {
        let commands = build_draw_list(&scene(Some(SelectedPoint::Anchor(2))));

        let outlined: Vec<bool> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Square { outline, .. } => Some(outline.is_some()),
                _ => None,
            })
            .collect();
        assert_eq!(outlined, vec![false, false, true]);
    }

    #[test]
    fn steuerpunkte_liegen_zuoberst_und_wachsen_bei_auswahl() {
        let radius = |selection| {
            let commands = build_draw_list(&scene(selection));
            match commands[commands.len() - 2] {
                DrawCommand::Circle { radius, .. } => radius,
                ref other => panic!("Steuerpunkt erwartet, erhalten: {other:?}"),
            }
        };

        assert_eq!(radius(None), 10.0);
        assert_eq!(radius(Some(SelectedPoint::Control(1))), 12.0);
    }
}
