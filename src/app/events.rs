//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::ToolMode;
use crate::core::{
    AttributeKind, AttributeUpdate, ControlPointAttribute, ControlPointUpdate, Routine,
    SelectedPoint,
};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Manuelle Änderung eines Ankers aus dem Eigenschaften-Panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorEdit {
    /// Neue Position in Feld-Zoll
    pub position: Option<Vec2>,
    /// Neuer Anzeigename
    pub name: Option<String>,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeigertaste in der Zeichenfläche gedrückt (Screen-Pixel relativ zur Fläche)
    PointerPressed { screen_pos: Vec2, modifier: bool },
    /// Zeiger bewegt
    PointerMoved { screen_pos: Vec2 },
    /// Zeigertaste losgelassen
    PointerReleased,
    /// Laufende Interaktion abbrechen (Escape)
    CancelRequested,
    /// Mausrad-Zoom, Fokus optional (sonst Mitte der Zeichenfläche)
    ZoomRequested { delta: f32, focal: Option<Vec2> },
    /// Stufenweise hineinzoomen (Toolbar)
    ZoomInRequested,
    /// Stufenweise herauszoomen (Toolbar)
    ZoomOutRequested,
    /// Ansicht auf das Feld einpassen
    ResetViewRequested,
    /// Größe der Zeichenfläche hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Werkzeug wechseln
    SetToolRequested { tool: ToolMode },
    /// Punkt aus einer Liste auswählen (wechselt passend das Werkzeug)
    SelectPointRequested { point: SelectedPoint },
    /// Ausgewählten Punkt löschen (nur mit Modifier-Taste)
    DeleteSelectedRequested { modifier: bool },
    /// Anker per Index löschen (Listen-Button)
    DeleteAnchorRequested { index: usize },
    /// Anker manuell bearbeiten
    AnchorEditRequested { index: usize, edit: AnchorEdit },
    /// Anker zwischen gerade und Kurve umschalten
    ToggleAnchorCurveRequested { index: usize },
    /// Kopfdaten eines Steuerpunkts ändern
    ControlPointEditRequested { id: u64, update: ControlPointUpdate },
    /// Steuerpunkt löschen (Listen-Button)
    DeleteControlPointRequested { id: u64 },
    /// Attribut mit Startwerten hinzufügen
    AddAttributeRequested { id: u64, kind: AttributeKind },
    /// Attribut bearbeiten
    AttributeEditRequested {
        id: u64,
        index: usize,
        update: AttributeUpdate,
    },
    /// Attribut entfernen
    RemoveAttributeRequested { id: u64, index: usize },
    /// Rückgängig
    UndoRequested,
    /// Wiederholen
    RedoRequested,
    /// Feldbild-Dateidialog öffnen
    FieldImageSelectionRequested,
    /// Feldbild wurde im Dialog gewählt
    FieldImageSelected { path: String },
    /// Routine in den Editor laden
    LoadRoutineRequested { routine: Box<Routine> },
    /// Arbeitsstand in die geladene Routine zurückschreiben
    SyncRoutineRequested,
    /// Optionen-Fenster öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Fenster schließen
    CloseOptionsDialogRequested,
    /// Optionen übernehmen
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Optionen als TOML speichern
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Interaktion ─────────────────────────────────────────────
    /// Werkzeug wechseln (Auswahl wird nur bei echtem Wechsel aufgehoben)
    SetActiveTool { tool: ToolMode },
    /// Auswahl setzen oder aufheben
    SelectPoint { point: Option<SelectedPoint> },
    /// Ziehen des ausgewählten Elements beginnen
    BeginDrag { target: SelectedPoint },
    /// Verschieben des Sichtbereichs beginnen
    BeginPan { screen_pos: Vec2 },
    /// Cursorposition (Feld-Zoll) nachführen
    UpdateCursor { screen_pos: Vec2 },
    /// Sichtbereich bis zur Zeigerposition verschieben
    PanTo { screen_pos: Vec2 },
    /// Gezogenes Element an die Position (Feld-Zoll) führen
    DragTo { position: Vec2 },
    /// Ziehen/Verschieben regulär beenden
    EndInteraction,
    /// Ziehen/Verschieben abbrechen und Ausgangszustand wiederherstellen
    CancelInteraction,
    /// Ausgewählten Anker oder Steuerpunkt löschen
    DeleteSelected,

    // ── Anker ───────────────────────────────────────────────────
    /// Neuen Kurvenanker ans Pfadende setzen und auswählen
    AddAnchorAt { position: Vec2 },
    /// Anker auf der Kurve einfügen und auswählen
    InsertAnchorOnCurve { segment: usize, t: f32 },
    /// Anker löschen (mit Mindestanzahl-Prüfung)
    DeleteAnchor { index: usize },
    /// Anker manuell bearbeiten
    UpdateAnchor { index: usize, edit: AnchorEdit },
    /// Anker zwischen gerade und Kurve umschalten
    ToggleAnchorCurve { index: usize },

    // ── Steuerpunkte ────────────────────────────────────────────
    /// Neuen Steuerpunkt bei `u` anlegen und auswählen
    AddControlPointAt { u: f32 },
    /// Kopfdaten eines Steuerpunkts ändern
    UpdateControlPoint { id: u64, update: ControlPointUpdate },
    /// Steuerpunkt löschen
    DeleteControlPoint { id: u64 },
    /// Attribut hinzufügen
    AddAttribute {
        id: u64,
        attribute: ControlPointAttribute,
    },
    /// Attribut bearbeiten
    UpdateAttribute {
        id: u64,
        index: usize,
        update: AttributeUpdate,
    },
    /// Attribut entfernen
    RemoveAttribute { id: u64, index: usize },

    // ── Viewport ────────────────────────────────────────────────
    /// Um einen Schritt zoomen (Vorzeichen von `delta`), Fokus optional
    ZoomAt { delta: f32, focal: Option<Vec2> },
    /// Feld einpassen und zentrieren
    ResetView,
    /// Größe der Zeichenfläche setzen
    SetViewportSize { size: [f32; 2] },

    // ── History ─────────────────────────────────────────────────
    Undo,
    Redo,

    // ── Feldbild & Routine ──────────────────────────────────────
    /// Feldbild-Dateidialog anfordern
    RequestFieldImageDialog,
    /// Feldbild laden
    LoadFieldImage { path: String },
    /// Routine in den Arbeitszustand kopieren
    LoadRoutine { routine: Box<Routine> },
    /// Arbeitszustand in die Routine schreiben
    SyncRoutine,

    // ── Optionen & Anwendung ────────────────────────────────────
    OpenOptionsDialog,
    CloseOptionsDialog,
    /// Optionen anwenden (baut das Feld-Mapping neu)
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen speichern
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}
