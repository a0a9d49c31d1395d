//! Kubische Bézier-Kurve: Auswertung und Teilung (De Casteljau).

use super::vector::lerp;
use super::GeometryError;
use glam::Vec2;

/// Kubische Bézier-Kurve aus vier Kontrollpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Startpunkt
    pub p0: Vec2,
    /// Erster innerer Kontrollpunkt
    pub p1: Vec2,
    /// Zweiter innerer Kontrollpunkt
    pub p2: Vec2,
    /// Endpunkt
    pub p3: Vec2,
}

impl CubicBezier {
    /// Erstellt eine Kurve aus vier Punkten.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Wertet die Kurve bei `t` aus.
    ///
    /// Strikter Vertrag: `t` muss in [0, 1] liegen, sonst `ParameterOutOfRange`.
    pub fn evaluate_at_t(&self, t: f32) -> Result<Vec2, GeometryError> {
        check_parameter(t)?;
        Ok(self.point_at(t))
    }

    /// Teilt die Kurve bei `t` in zwei Teilkurven `[0, t]` und `[t, 1]`.
    pub fn split_at_t(&self, t: f32) -> Result<(CubicBezier, CubicBezier), GeometryError> {
        check_parameter(t)?;

        let p01 = lerp(self.p0, self.p1, t);
        let p12 = lerp(self.p1, self.p2, t);
        let p23 = lerp(self.p2, self.p3, t);

        let p012 = lerp(p01, p12, t);
        let p123 = lerp(p12, p23, t);

        let p0123 = lerp(p012, p123, t);

        Ok((
            CubicBezier::new(self.p0, p01, p012, p0123),
            CubicBezier::new(p0123, p123, p23, self.p3),
        ))
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    ///
    /// Ohne Bereichsprüfung; nur mit bereits geclamptem `t` aufrufen.
    pub(crate) fn point_at(&self, t: f32) -> Vec2 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.p0 + 3.0 * inv2 * t * self.p1 + 3.0 * inv * t2 * self.p2 + t2 * t * self.p3
    }
}

fn check_parameter(t: f32) -> Result<(), GeometryError> {
    if (0.0..=1.0).contains(&t) {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange { t })
    }
}
