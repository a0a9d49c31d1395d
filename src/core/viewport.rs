//! Viewport für Pan und Zoom über dem Feld.
//!
//! Screen-Koordinaten sind Pixel relativ zur linken oberen Ecke der Zeichenfläche:
//! `screen = canvas * scale + offset`.

use glam::Vec2;

/// Sichtbereich: Skalierung und Verschiebung der Canvas-Ebene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Pixel pro Canvas-Einheit (immer > 0)
    pub scale: f32,
    /// Screen-Position des Canvas-Ursprungs
    pub offset: Vec2,
}

impl Viewport {
    /// Erstellt den Standard-Viewport (Scale 1, kein Offset).
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Screen-Pixel → Canvas-Einheiten.
    pub fn screen_to_canvas(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }

    /// Canvas-Einheiten → Screen-Pixel.
    pub fn canvas_to_screen(&self, canvas: Vec2) -> Vec2 {
        canvas * self.scale + self.offset
    }

    /// Verschiebt den Sichtbereich um ein Screen-Delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Skaliert um `factor` (geclampt auf `[min, max]`), der Punkt unter `focal` bleibt stehen.
    pub fn zoom_at(&mut self, factor: f32, focal: Vec2, min: f32, max: f32) {
        let new_scale = (self.scale * factor).clamp(min, max);
        let ratio = new_scale / self.scale;
        self.offset = focal - (focal - self.offset) * ratio;
        self.scale = new_scale;
    }

    /// Passt das Feld in den Container ein (nie vergrößert) und zentriert es.
    ///
    /// Container ohne positive Fläche werden ignoriert; `false` in diesem Fall.
    pub fn fit_to_container(&mut self, field_size: Vec2, container_size: Vec2) -> bool {
        if container_size.x <= 0.0
            || container_size.y <= 0.0
            || field_size.x <= 0.0
            || field_size.y <= 0.0
        {
            return false;
        }
        let fit = container_size / field_size;
        self.scale = fit.x.min(fit.y).min(1.0);
        self.offset = (container_size - field_size * self.scale) / 2.0;
        true
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zoom_haelt_fokuspunkt_fest() {
        let mut viewport = Viewport {
            scale: 0.8,
            offset: Vec2::new(40.0, -12.0),
        };
        let focal = Vec2::new(320.0, 210.0);
        let canvas_before = viewport.screen_to_canvas(focal);

        viewport.zoom_at(1.05, focal, 0.25, 5.0);
        assert_relative_eq!(viewport.scale, 0.84, epsilon = 1e-5);

        let canvas_after = viewport.screen_to_canvas(focal);
        assert_relative_eq!(canvas_after.x, canvas_before.x, epsilon = 1e-3);
        assert_relative_eq!(canvas_after.y, canvas_before.y, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_wird_begrenzt() {
        let mut viewport = Viewport::new();
        for _ in 0..200 {
            viewport.zoom_at(1.05, Vec2::ZERO, 0.25, 5.0);
        }
        assert_relative_eq!(viewport.scale, 5.0);
        for _ in 0..200 {
            viewport.zoom_at(0.95, Vec2::ZERO, 0.25, 5.0);
        }
        assert_relative_eq!(viewport.scale, 0.25);
    }

    #[test]
    fn test_einpassen_zentriert_und_vergroessert_nicht() {
        let field = Vec2::new(1314.0, 732.0);

        let mut viewport = Viewport::new();
        assert!(viewport.fit_to_container(field, Vec2::new(3000.0, 2000.0)));
        assert_relative_eq!(viewport.scale, 1.0);
        assert_relative_eq!(viewport.offset.x, (3000.0 - 1314.0) / 2.0);
        assert_relative_eq!(viewport.offset.y, (2000.0 - 732.0) / 2.0);

        assert!(viewport.fit_to_container(field, Vec2::new(657.0, 800.0)));
        assert_relative_eq!(viewport.scale, 0.5);
        assert_relative_eq!(viewport.offset.x, 0.0);
        assert_relative_eq!(viewport.offset.y, (800.0 - 366.0) / 2.0);
    }

    #[test]
    fn test_leerer_container_wird_ignoriert() {
        let mut viewport = Viewport::new();
        viewport.pan(Vec2::new(5.0, 5.0));
        let before = viewport;
        assert!(!viewport.fit_to_container(Vec2::new(1314.0, 732.0), Vec2::new(0.0, 600.0)));
        assert_eq!(viewport, before);
    }

    #[test]
    fn test_screen_canvas_hin_und_zurueck() {
        let viewport = Viewport {
            scale: 2.5,
            offset: Vec2::new(-30.0, 18.0),
        };
        let p = Vec2::new(123.0, 456.0);
        let back = viewport.screen_to_canvas(viewport.canvas_to_screen(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-3);
    }
}
