//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Feldbild-Dateidialog.
pub fn request_field_image_dialog(state: &mut AppState) {
    use_cases::field_image::request_field_image_dialog(state);
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    use_cases::options::apply_options(state, options)
}

/// Persistiert die Optionen in der Konfigurationsdatei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::save_options(state)
}
