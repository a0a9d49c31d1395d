//! Use-Case-Funktionen für Editor-Optionen.

use super::viewport;
use crate::app::AppState;
use crate::core::FieldMapping;
use crate::shared::EditorOptions;
use anyhow::{Context, Result};

/// Übernimmt neue Optionen und baut das Feld-Mapping neu auf.
///
/// Entartete Referenzpaare werden abgelehnt, die bisherigen Optionen bleiben
/// dann aktiv. Ändert sich die Feldgröße, wird die Ansicht neu eingepasst.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> Result<()> {
    let mapping = FieldMapping::from_reference_pairs(&options.reference_pairs)
        .context("Optionen nicht übernommen")?;
    let field_changed = options.field.size() != state.options.field.size();

    state.view.mapping = mapping;
    state.options = options;
    if field_changed {
        viewport::reset_view(state);
    }

    log::debug!("Optionen übernommen");
    Ok(())
}

/// Speichert die aktuellen Optionen neben der Binary.
pub fn save_options(state: &AppState) -> Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
