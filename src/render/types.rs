//! Rendering-Typen: Zeichenbefehle und gemeinsamer Kontext.

use crate::core::{FieldMapping, Viewport};
use crate::shared::EditorOptions;
use glam::Vec2;

/// RGBA-Farbe mit Komponenten in [0, 1].
pub type Rgba = [f32; 4];

/// Breite der Handle-Linien (Canvas-Einheiten)
pub(crate) const HANDLE_LINE_WIDTH: f32 = 2.0;
/// Breite der Auswahl-Umrandung eines Ankers (Canvas-Einheiten)
pub(crate) const SELECTION_OUTLINE_WIDTH: f32 = 2.0;
/// Farbe des Mittelpunkts eines Steuerpunkts
pub(crate) const CONTROL_CENTER_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Ein Zeichenbefehl in Screen-Pixeln relativ zur Zeichenfläche.
///
/// Die Liste wird in Reihenfolge gezeichnet; spätere Befehle liegen oben.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Feldbild in das Rechteck gestreckt
    FieldImage { min: Vec2, max: Vec2 },
    /// Gefülltes Rechteck
    FilledRect { min: Vec2, max: Vec2, color: Rgba },
    /// Durchgezogener Linienzug
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: Rgba,
    },
    /// Gestrichelter Linienzug (`dash` = [Strich, Lücke])
    DashedPolyline {
        points: Vec<Vec2>,
        width: f32,
        color: Rgba,
        dash: [f32; 2],
    },
    /// Einzelne Linie
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    /// Quadrat mit optionaler Umrandung (Breite, Farbe)
    Square {
        center: Vec2,
        size: f32,
        fill: Rgba,
        outline: Option<(f32, Rgba)>,
    },
    /// Gefüllter Kreis
    Circle {
        center: Vec2,
        radius: f32,
        fill: Rgba,
    },
}

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die Abbildung Feld-Zoll → Canvas → Screen und die Optionen.
pub(crate) struct RenderContext<'a> {
    /// Pan/Zoom dieses Frames
    pub viewport: Viewport,
    /// Canvas↔Zoll-Abbildung
    pub mapping: FieldMapping,
    /// Editor-Optionen (Farben, Größen)
    pub options: &'a EditorOptions,
}

impl RenderContext<'_> {
    /// Feld-Zoll → Screen-Pixel.
    pub fn inch_to_screen(&self, inch: Vec2) -> Vec2 {
        self.canvas_to_screen(self.mapping.inch_to_canvas(inch))
    }

    /// Canvas-Einheiten → Screen-Pixel.
    pub fn canvas_to_screen(&self, canvas: Vec2) -> Vec2 {
        self.viewport.canvas_to_screen(canvas)
    }

    /// Größe in Canvas-Einheiten → Screen-Pixel.
    pub fn scaled(&self, size: f32) -> f32 {
        size * self.viewport.scale
    }
}

/// Setzt den Alpha-Kanal einer Farbe (multipliziert).
pub(crate) fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    [color[0], color[1], color[2], color[3] * alpha]
}
