//! Zentrale Konfiguration für Auto-Routine-Studio.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{FieldConfig, ReferencePairs};
use serde::{Deserialize, Serialize};

// ── Treffer-Tests (Feld-Zoll) ───────────────────────────────────────

/// Trefferradius für Anker, Handles und Steuerpunkte.
pub const POINT_HIT_RADIUS: f32 = 5.0;
/// Maximaler Abstand, in dem ein Klick noch auf die Kurve projiziert wird.
pub const CURVE_SEARCH_RADIUS: f32 = 30.0;
/// Maximaler Abstand zur Kurve für das Einfügen eines Ankers.
pub const CURVE_INSERT_RADIUS: f32 = 10.0;
/// Abtastschritte pro Segment bei der Nächster-Punkt-Suche.
pub const CURVE_SEARCH_STEPS: usize = 100;

// ── Anker ───────────────────────────────────────────────────────────

/// Handle-Länge neu gesetzter Anker.
pub const NEW_ANCHOR_HANDLE_LENGTH: f32 = 20.0;
/// Handle-Länge beim Umschalten eines Ankers auf Kurve.
pub const CURVE_TOGGLE_HANDLE_LENGTH: f32 = 30.0;

// ── Viewport ────────────────────────────────────────────────────────

/// Zoom-Faktor pro Schritt hinein.
pub const ZOOM_IN_FACTOR: f32 = 1.05;
/// Zoom-Faktor pro Schritt heraus.
pub const ZOOM_OUT_FACTOR: f32 = 0.95;
/// Minimale Viewport-Skalierung.
pub const ZOOM_MIN: f32 = 0.25;
/// Maximale Viewport-Skalierung.
pub const ZOOM_MAX: f32 = 5.0;

// ── Pfad-Rendering (Canvas-Einheiten) ──────────────────────────────

/// Farbe des Pfads (RGBA: Blau #3B82F6).
pub const PATH_COLOR: [f32; 4] = [0.231, 0.510, 0.965, 1.0];
/// Linienstärke des Pfads.
pub const PATH_WIDTH: f32 = 4.0;
/// Linienstärke der gestrichelten Überlagerung.
pub const PATH_DASH_WIDTH: f32 = 2.0;
/// Strich- und Lückenlänge der Überlagerung.
pub const PATH_DASH_PATTERN: [f32; 2] = [8.0, 4.0];
/// Deckkraft der Überlagerung.
pub const PATH_DASH_ALPHA: f32 = 0.4;
/// Abtastpunkte pro Segment beim Zeichnen.
pub const PATH_SAMPLES_PER_SEGMENT: usize = 32;

// ── Anker-Rendering ────────────────────────────────────────────────

/// Kantenlänge der Anker-Quadrate.
pub const ANCHOR_SIZE: f32 = 10.0;
/// Farbe der Anker (RGBA: Blau).
pub const ANCHOR_COLOR: [f32; 4] = [0.231, 0.510, 0.965, 1.0];
/// Rahmenfarbe ausgewählter Elemente (RGBA: Weiß).
pub const SELECTION_HIGHLIGHT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Handle-Linien (RGBA: Grau #374151).
pub const HANDLE_LINE_COLOR: [f32; 4] = [0.216, 0.255, 0.318, 1.0];
/// Radius der Handle-Punkte.
pub const HANDLE_RADIUS: f32 = 5.0;
/// Farbe des gerade bearbeiteten Handles.
pub const HANDLE_ACTIVE_COLOR: [f32; 4] = [0.231, 0.510, 0.965, 1.0];
/// Farbe nicht bearbeiteter Handles (RGBA: #185CC9).
pub const HANDLE_INACTIVE_COLOR: [f32; 4] = [0.094, 0.361, 0.788, 1.0];

// ── Steuerpunkt-Rendering ──────────────────────────────────────────

/// Radius nicht ausgewählter Steuerpunkte.
pub const CONTROL_RADIUS: f32 = 5.0;
/// Radius des ausgewählten Steuerpunkts.
pub const CONTROL_RADIUS_SELECTED: f32 = 6.0;
/// Radius des weißen Mittelpunkts.
pub const CONTROL_CENTER_RADIUS: f32 = 1.5;
/// Radius des weißen Mittelpunkts bei Auswahl.
pub const CONTROL_CENTER_RADIUS_SELECTED: f32 = 2.0;

// ── Feld ────────────────────────────────────────────────────────────

/// Platzhalterfarbe ohne Feldbild (RGBA: #1A1A1A).
pub const FIELD_PLACEHOLDER_COLOR: [f32; 4] = [0.102, 0.102, 0.102, 1.0];
/// Hintergrund der Zeichenfläche (RGBA: #0E111B).
pub const CANVAS_BACKGROUND_COLOR: [f32; 4] = [0.055, 0.067, 0.106, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `auto_routine_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Treffer-Tests ───────────────────────────────────────────
    /// Trefferradius für Anker, Handles und Steuerpunkte (Zoll)
    pub point_hit_radius: f32,
    /// Suchradius für Kurvenprojektion (Zoll)
    pub curve_search_radius: f32,
    /// Maximaler Abstand zum Einfügen auf der Kurve (Zoll)
    pub curve_insert_radius: f32,
    /// Abtastschritte pro Segment
    pub curve_search_steps: usize,

    // ── Anker ───────────────────────────────────────────────────
    /// Handle-Länge neu gesetzter Anker
    pub new_anchor_handle_length: f32,
    /// Handle-Länge beim Umschalten auf Kurve
    pub curve_toggle_handle_length: f32,

    // ── Viewport ────────────────────────────────────────────────
    /// Zoom-Faktor hinein
    pub zoom_in_factor: f32,
    /// Zoom-Faktor heraus
    pub zoom_out_factor: f32,
    /// Minimale Skalierung
    pub zoom_min: f32,
    /// Maximale Skalierung
    pub zoom_max: f32,

    // ── Rendering ───────────────────────────────────────────────
    /// Pfadfarbe
    pub path_color: [f32; 4],
    /// Pfad-Linienstärke
    pub path_width: f32,
    /// Linienstärke der Strichelung
    pub path_dash_width: f32,
    /// Strich/Lücke der Strichelung
    pub path_dash_pattern: [f32; 2],
    /// Deckkraft der Strichelung
    pub path_dash_alpha: f32,
    /// Abtastpunkte pro Segment beim Zeichnen
    #[serde(default = "default_path_samples_per_segment")]
    pub path_samples_per_segment: usize,
    /// Anker-Kantenlänge
    pub anchor_size: f32,
    /// Ankerfarbe
    pub anchor_color: [f32; 4],
    /// Auswahl-Rahmenfarbe
    pub selection_highlight_color: [f32; 4],
    /// Handle-Linienfarbe
    pub handle_line_color: [f32; 4],
    /// Handle-Radius
    pub handle_radius: f32,
    /// Farbe des bearbeiteten Handles
    pub handle_active_color: [f32; 4],
    /// Farbe der übrigen Handles
    pub handle_inactive_color: [f32; 4],
    /// Steuerpunkt-Radius
    pub control_radius: f32,
    /// Steuerpunkt-Radius bei Auswahl
    pub control_radius_selected: f32,
    /// Mittelpunkt-Radius
    pub control_center_radius: f32,
    /// Mittelpunkt-Radius bei Auswahl
    pub control_center_radius_selected: f32,
    /// Platzhalterfarbe ohne Feldbild
    pub field_placeholder_color: [f32; 4],
    /// Hintergrund der Zeichenfläche
    pub canvas_background_color: [f32; 4],

    // ── Feld (TOML-Tabellen, daher am Ende) ─────────────────────
    /// Feldabmessungen und Bildpfad
    #[serde(default)]
    pub field: FieldConfig,
    /// Referenzpaare für das Canvas↔Zoll-Mapping
    #[serde(default)]
    pub reference_pairs: ReferencePairs,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_hit_radius: POINT_HIT_RADIUS,
            curve_search_radius: CURVE_SEARCH_RADIUS,
            curve_insert_radius: CURVE_INSERT_RADIUS,
            curve_search_steps: CURVE_SEARCH_STEPS,

            new_anchor_handle_length: NEW_ANCHOR_HANDLE_LENGTH,
            curve_toggle_handle_length: CURVE_TOGGLE_HANDLE_LENGTH,

            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,

            path_color: PATH_COLOR,
            path_width: PATH_WIDTH,
            path_dash_width: PATH_DASH_WIDTH,
            path_dash_pattern: PATH_DASH_PATTERN,
            path_dash_alpha: PATH_DASH_ALPHA,
            path_samples_per_segment: PATH_SAMPLES_PER_SEGMENT,
            anchor_size: ANCHOR_SIZE,
            anchor_color: ANCHOR_COLOR,
            selection_highlight_color: SELECTION_HIGHLIGHT_COLOR,
            handle_line_color: HANDLE_LINE_COLOR,
            handle_radius: HANDLE_RADIUS,
            handle_active_color: HANDLE_ACTIVE_COLOR,
            handle_inactive_color: HANDLE_INACTIVE_COLOR,
            control_radius: CONTROL_RADIUS,
            control_radius_selected: CONTROL_RADIUS_SELECTED,
            control_center_radius: CONTROL_CENTER_RADIUS,
            control_center_radius_selected: CONTROL_CENTER_RADIUS_SELECTED,
            field_placeholder_color: FIELD_PLACEHOLDER_COLOR,
            canvas_background_color: CANVAS_BACKGROUND_COLOR,

            field: FieldConfig::default(),
            reference_pairs: ReferencePairs::default(),
        }
    }
}

/// Serde-Default für `path_samples_per_segment` (Abwärtskompatibilität).
fn default_path_samples_per_segment() -> usize {
    PATH_SAMPLES_PER_SEGMENT
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("auto_routine_studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("auto_routine_studio.toml")
    }

    /// Zoom-Faktor für ein Scroll-Delta; `None` bei Delta 0.
    pub fn zoom_factor_for_delta(&self, delta: f32) -> Option<f32> {
        if delta > 0.0 {
            Some(self.zoom_in_factor)
        } else if delta < 0.0 {
            Some(self.zoom_out_factor)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip_erhaelt_werte() {
        let mut options = EditorOptions::default();
        options.point_hit_radius = 7.5;
        options.field.image_path = Some("assets/reefscape_field.png".into());

        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_fehlende_datei_liefert_standardwerte() {
        let options =
            EditorOptions::load_from_file(std::path::Path::new("/nicht/vorhanden/optionen.toml"));
        assert_eq!(options, EditorOptions::default());
    }

    #[test]
    fn test_zoom_faktor_nach_vorzeichen() {
        let options = EditorOptions::default();
        assert_eq!(options.zoom_factor_for_delta(120.0), Some(ZOOM_IN_FACTOR));
        assert_eq!(options.zoom_factor_for_delta(-0.5), Some(ZOOM_OUT_FACTOR));
        assert_eq!(options.zoom_factor_for_delta(0.0), None);
    }
}
