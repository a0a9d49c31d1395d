//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{ControlPoint, FieldConfig, FieldMapping, SelectedPoint, Spline, Viewport};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Pfad in Feld-Zoll
    pub spline: Spline,
    /// Steuerpunkte, aufsteigend nach `u` sortiert
    pub controls: Vec<ControlPoint>,
    /// Viewport-Zustand für diesen Frame
    pub viewport: Viewport,
    /// Größe der Zeichenfläche in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Canvas↔Zoll-Abbildung
    pub mapping: FieldMapping,
    /// Feldabmessungen
    pub field: FieldConfig,
    /// Aktuelle Auswahl
    pub selection: Option<SelectedPoint>,
    /// Ob ein Feldbild geladen ist (sonst Platzhalter)
    pub has_field_image: bool,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein zeichenbarer Pfad vorhanden ist.
    pub fn has_path(&self) -> bool {
        self.spline.segment_count() > 0
    }
}
