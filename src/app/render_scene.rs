//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Steuerpunkte werden nach `u` sortiert übergeben.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        spline: state.spline.clone(),
        controls: state
            .controls
            .sorted_by_u()
            .into_iter()
            .cloned()
            .collect(),
        viewport: state.view.viewport,
        viewport_size: state.view.viewport_size,
        mapping: state.view.mapping,
        field: state.options.field.clone(),
        selection: state.selection.selected,
        has_field_image: state.view.field_image.is_some(),
        options: state.options.clone(),
    }
}
