//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, ToolMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, werden nur Undo/Redo ausgewertet.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (key_escape_pressed, key_del_pressed, key_1_pressed, key_2_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
        )
    });

    if key_escape_pressed {
        events.push(AppIntent::CancelRequested);
    }

    // Löschen nur mit Shift, damit Backspace nicht versehentlich löscht
    if key_del_pressed {
        events.push(AppIntent::DeleteSelectedRequested {
            modifier: modifiers.shift,
        });
    }

    if !modifiers.command {
        if key_1_pressed {
            events.push(AppIntent::SetToolRequested {
                tool: ToolMode::Anchor,
            });
        }
        if key_2_pressed {
            events.push(AppIntent::SetToolRequested {
                tool: ToolMode::Control,
            });
        }
    }

    events
}

#[cfg(test)]
mod tests;
