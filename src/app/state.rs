//! Application State: zentrale Datenhaltung der Editor-Sitzung.

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{
    ControlPointList, FieldImage, FieldMapping, Routine, SelectedPoint, Spline, Viewport,
};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Anker und Handles bearbeiten, Anker setzen/einfügen
    #[default]
    Anchor,
    /// Steuerpunkte setzen und verschieben
    Control,
}

impl ToolMode {
    /// Anzeigename für Toolbar und Statusleiste.
    pub fn label(self) -> &'static str {
        match self {
            ToolMode::Anchor => "Anker",
            ToolMode::Control => "Steuerpunkte",
        }
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: ToolMode,
}

/// Zeiger-Interaktion in der Zeichenfläche.
#[derive(Debug, Clone, Default)]
pub enum Interaction {
    /// Keine laufende Interaktion
    #[default]
    Idle,
    /// Ein Element wird gezogen; `before` dient für Abbruch und Undo
    Dragging {
        target: SelectedPoint,
        before: Box<Snapshot>,
    },
    /// Der Sichtbereich wird verschoben
    Panning {
        last_screen: Vec2,
        viewport_before: Viewport,
    },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Interaction::Panning { .. })
    }
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Aktuell ausgewählter Punkt
    pub selected: Option<SelectedPoint>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Hebt die Auswahl auf.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Index des ausgewählten Ankers (auch bei ausgewähltem Handle).
    pub fn anchor_index(&self) -> Option<usize> {
        self.selected.and_then(SelectedPoint::anchor_index)
    }

    /// ID des ausgewählten Steuerpunkts.
    pub fn control_id(&self) -> Option<u64> {
        self.selected.and_then(SelectedPoint::control_id)
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Feldbild-Dialog geöffnet werden soll
    pub show_field_image_dialog: bool,
    /// Ob das Optionen-Fenster angezeigt wird
    pub show_options_dialog: bool,
    /// Temporäre Statusnachricht (z.B. abgelehnte Bearbeitung)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug)]
pub struct ViewState {
    /// Pan/Zoom der Zeichenfläche
    pub viewport: Viewport,
    /// Aktuelle Größe der Zeichenfläche in Pixel
    pub viewport_size: [f32; 2],
    /// Canvas↔Zoll-Abbildung (aus den Referenzpaaren der Optionen)
    pub mapping: FieldMapping,
    /// Letzte Cursorposition in Feld-Zoll
    pub cursor_inch: Vec2,
    /// Geladenes Feldbild (optional)
    pub field_image: Option<Arc<FieldImage>>,
    /// Signalisiert, dass die Feldbild-Textur neu hochgeladen werden muss
    pub field_image_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new(mapping: FieldMapping) -> Self {
        Self {
            viewport: Viewport::new(),
            viewport_size: [0.0, 0.0],
            mapping,
            cursor_inch: Vec2::ZERO,
            field_image: None,
            field_image_dirty: false,
        }
    }

    /// Screen-Pixel → Feld-Zoll.
    pub fn screen_to_inch(&self, screen: Vec2) -> Vec2 {
        self.mapping
            .canvas_to_inch(self.viewport.screen_to_canvas(screen))
    }

    /// Feld-Zoll → Screen-Pixel.
    pub fn inch_to_screen(&self, inch: Vec2) -> Vec2 {
        self.viewport
            .canvas_to_screen(self.mapping.inch_to_canvas(inch))
    }

    /// Mitte der Zeichenfläche in Screen-Pixeln.
    pub fn container_center(&self) -> Vec2 {
        Vec2::from(self.viewport_size) / 2.0
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Arbeitskopie des Pfads
    pub spline: Spline,
    /// Arbeitskopie der Steuerpunkte
    pub controls: ControlPointList,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Laufende Zeiger-Interaktion
    pub interaction: Interaction,
    /// Zuletzt geladene Routine (Ziel von `SyncRoutine`)
    pub routine: Option<Routine>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Trefferradien, Zoom, Farben)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
    /// Zuletzt vergebene Steuerpunkt-ID
    last_control_id: u64,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    ///
    /// Ungültige Referenzpaare fallen auf das Standard-Mapping zurück.
    pub fn with_options(options: EditorOptions) -> Self {
        let mapping = match FieldMapping::from_reference_pairs(&options.reference_pairs) {
            Ok(mapping) => mapping,
            Err(e) => {
                log::warn!("Referenzpaare ungültig, verwende Standard-Mapping: {}", e);
                FieldMapping::default()
            }
        };
        Self {
            spline: Spline::default(),
            controls: ControlPointList::default(),
            view: ViewState::new(mapping),
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::default(),
            interaction: Interaction::Idle,
            routine: None,
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(200),
            options,
            should_exit: false,
            last_control_id: 0,
        }
    }

    /// Gibt die Anzahl der Anker zurück (für UI-Anzeige)
    pub fn anchor_count(&self) -> usize {
        self.spline.len()
    }

    /// Gibt die Anzahl der Steuerpunkte zurück (für UI-Anzeige)
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Vergibt eine neue Steuerpunkt-ID aus dem Millisekunden-Zeitstempel.
    ///
    /// Streng monoton, auch bei mehreren Aufrufen in derselben Millisekunde,
    /// und nie gleich einer vorhandenen ID.
    pub fn next_control_id(&mut self) -> u64 {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut id = now_ms.max(self.last_control_id + 1);
        while self.controls.get(id).is_some() {
            id += 1;
        }
        self.last_control_id = id;
        id
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControlPoint, ControlPointColor};
    use approx::assert_relative_eq;

    #[test]
    fn test_control_ids_sind_streng_monoton() {
        let mut state = AppState::new();
        let a = state.next_control_id();
        let b = state.next_control_id();
        let c = state.next_control_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_control_id_kollidiert_nicht_mit_vorhandenen() {
        let mut state = AppState::new();
        let first = state.next_control_id();
        state
            .controls
            .add(ControlPoint::new(first + 1, 0.0, ControlPointColor::Blue));
        let second = state.next_control_id();
        assert_ne!(second, first + 1);
        assert!(second > first);
    }

    #[test]
    fn test_screen_zoll_hin_und_zurueck() {
        let mut state = AppState::new();
        state.view.viewport = Viewport {
            scale: 0.7,
            offset: Vec2::new(12.0, 40.0),
        };
        let inch = Vec2::new(300.0, 150.0);
        let back = state.view.screen_to_inch(state.view.inch_to_screen(inch));
        assert_relative_eq!(back.x, inch.x, epsilon = 1e-2);
        assert_relative_eq!(back.y, inch.y, epsilon = 1e-2);
    }
}
