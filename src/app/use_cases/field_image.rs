//! Use-Case-Funktionen für das Feldbild.

use crate::app::AppState;
use crate::core::FieldImage;
use anyhow::Result;
use std::sync::Arc;

/// Öffnet den Feldbild-Auswahl-Dialog.
pub fn request_field_image_dialog(state: &mut AppState) {
    state.ui.show_field_image_dialog = true;
}

/// Lädt ein Feldbild von einem Dateipfad.
///
/// Bei einem Fehler bleibt das bisherige Bild (oder der Platzhalter) bestehen.
pub fn load_field_image(state: &mut AppState, path: String) -> Result<()> {
    log::info!("Lade Feldbild: {}", path);

    let image = FieldImage::load_from_file(&path)?;
    let [width, height] = image.size();
    log::info!("Feldbild geladen: {}x{} Pixel", width, height);

    state.view.field_image = Some(Arc::new(image));
    state.view.field_image_dirty = true;
    state.options.field.image_path = Some(path);

    Ok(())
}
