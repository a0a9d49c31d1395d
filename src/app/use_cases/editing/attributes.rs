//! Use-Cases: Attribute eines Steuerpunkts.

use crate::app::AppState;
use crate::core::{AttributeUpdate, ControlPointAttribute};

/// Fügt ein Attribut hinzu. Eine bereits vorhandene Art wird abgelehnt.
///
/// Die Ablehnung wird als Fehler an den Controller gemeldet und zusätzlich
/// in der Statusleiste angezeigt.
pub fn add_attribute(
    state: &mut AppState,
    id: u64,
    attribute: ControlPointAttribute,
) -> anyhow::Result<()> {
    let Some(point) = state.controls.get(id) else {
        log::debug!("Steuerpunkt {} nicht gefunden", id);
        return Ok(());
    };
    let kind = attribute.kind();
    if point.has_attribute(kind) {
        state.ui.status_message = Some(format!("Attribut {} ist bereits vorhanden", kind));
    } else {
        state.record_undo_snapshot();
    }

    state.controls.add_attribute(id, attribute)?;
    log::debug!("Attribut {} zu Steuerpunkt {} hinzugefügt", kind, id);
    Ok(())
}

/// Ändert einzelne Werte eines Attributs; die Art bleibt erhalten.
pub fn update_attribute(state: &mut AppState, id: u64, index: usize, update: AttributeUpdate) {
    let exists = state
        .controls
        .get(id)
        .is_some_and(|point| index < point.attributes.len());
    if !exists {
        log::debug!("Attribut {} von Steuerpunkt {} nicht gefunden", index, id);
        return;
    }

    state.record_undo_snapshot();
    state.controls.update_attribute(id, index, update);
}

/// Entfernt das Attribut am Index.
pub fn remove_attribute(state: &mut AppState, id: u64, index: usize) {
    let exists = state
        .controls
        .get(id)
        .is_some_and(|point| index < point.attributes.len());
    if !exists {
        log::debug!("Attribut {} von Steuerpunkt {} nicht gefunden", index, id);
        return;
    }

    state.record_undo_snapshot();
    if let Some(removed) = state.controls.remove_attribute(id, index) {
        log::debug!("Attribut {} von Steuerpunkt {} entfernt", removed.kind(), id);
    }
}
