//! Spielfeld-Geometrie und Abbildung Canvas-Einheiten ↔ Feld-Zoll.
//!
//! Das Feldbild wird in Canvas-Einheiten gezeichnet (1 Einheit = 1 Bildpixel bei
//! Viewport-Scale 1). Pfade werden dagegen in Zoll gespeichert. Zwei feste
//! Referenzpaare legen eine affine Abbildung (Skalierung + Offset je Achse) fest.

use super::GeometryError;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Canvas-Position des ersten Referenzpunkts.
pub const CANVAS_REF_1: [f32; 2] = [174.73, 587.47];
/// Canvas-Position des zweiten Referenzpunkts.
pub const CANVAS_REF_2: [f32; 2] = [1139.20, 144.38];
/// Zoll-Position des ersten Referenzpunkts.
pub const INCH_REF_1: [f32; 2] = [0.0, 0.0];
/// Zoll-Position des zweiten Referenzpunkts.
pub const INCH_REF_2: [f32; 2] = [690.625, 317.0];

/// Breite des Feldbilds in Canvas-Einheiten.
pub const FIELD_WIDTH: f32 = 1314.0;
/// Höhe des Feldbilds in Canvas-Einheiten.
pub const FIELD_HEIGHT: f32 = 732.0;

/// Zwei Korrespondenzpaare (Canvas ↔ Zoll), aus denen das Mapping berechnet wird.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePairs {
    /// Canvas-Koordinate von Referenzpunkt 1
    pub canvas_1: [f32; 2],
    /// Canvas-Koordinate von Referenzpunkt 2
    pub canvas_2: [f32; 2],
    /// Zoll-Koordinate von Referenzpunkt 1
    pub inch_1: [f32; 2],
    /// Zoll-Koordinate von Referenzpunkt 2
    pub inch_2: [f32; 2],
}

impl Default for ReferencePairs {
    fn default() -> Self {
        Self {
            canvas_1: CANVAS_REF_1,
            canvas_2: CANVAS_REF_2,
            inch_1: INCH_REF_1,
            inch_2: INCH_REF_2,
        }
    }
}

/// Affine Abbildung `inch = canvas * scale + offset` (komponentenweise).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMapping {
    scale: Vec2,
    offset: Vec2,
}

impl FieldMapping {
    /// Berechnet das Mapping aus zwei Referenzpaaren.
    ///
    /// Schlägt fehl, wenn die Paare auf einer Achse keine Strecke aufspannen
    /// (Canvas- oder Zoll-Koordinaten gleich).
    pub fn from_reference_pairs(refs: &ReferencePairs) -> Result<Self, GeometryError> {
        let canvas_span = Vec2::from(refs.canvas_2) - Vec2::from(refs.canvas_1);
        let inch_span = Vec2::from(refs.inch_2) - Vec2::from(refs.inch_1);
        if canvas_span.x == 0.0
            || canvas_span.y == 0.0
            || inch_span.x == 0.0
            || inch_span.y == 0.0
        {
            return Err(GeometryError::DegenerateReference);
        }
        Ok(Self::compute(refs))
    }

    fn compute(refs: &ReferencePairs) -> Self {
        let canvas_1 = Vec2::from(refs.canvas_1);
        let inch_1 = Vec2::from(refs.inch_1);
        let scale = (Vec2::from(refs.inch_2) - inch_1) / (Vec2::from(refs.canvas_2) - canvas_1);
        let offset = inch_1 - canvas_1 * scale;
        Self { scale, offset }
    }

    /// Canvas-Einheiten → Feld-Zoll.
    pub fn canvas_to_inch(&self, canvas: Vec2) -> Vec2 {
        canvas * self.scale + self.offset
    }

    /// Feld-Zoll → Canvas-Einheiten.
    pub fn inch_to_canvas(&self, inch: Vec2) -> Vec2 {
        (inch - self.offset) / self.scale
    }

    /// Zoll pro Canvas-Einheit je Achse (Y ist negativ: Feld-Y zeigt nach oben).
    pub fn scale(&self) -> Vec2 {
        self.scale
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::compute(&ReferencePairs::default())
    }
}

/// Feste Abmessungen des Spielfelds und optionales Feldbild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Breite in Canvas-Einheiten
    pub width: f32,
    /// Höhe in Canvas-Einheiten
    pub height: f32,
    /// Pfad zum Feldbild (PNG/JPEG); ohne Bild wird ein Platzhalter gezeichnet
    #[serde(default)]
    pub image_path: Option<String>,
}

impl FieldConfig {
    /// Abmessungen als Vektor.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            image_path: None,
        }
    }
}
