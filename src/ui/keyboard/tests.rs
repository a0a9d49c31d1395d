use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(key: egui::Key, modifiers: egui::Modifiers) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.modifiers = modifiers;
    raw_input.events.push(key_event(key, modifiers));

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

#[test]
fn test_shift_delete_emits_delete_with_modifier() {
    let events = collect_with_key_event(egui::Key::Delete, egui::Modifiers::SHIFT);

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::DeleteSelectedRequested { modifier: true }
    )));
}

#[test]
fn test_backspace_without_shift_has_no_modifier() {
    let events = collect_with_key_event(egui::Key::Backspace, egui::Modifiers::default());

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::DeleteSelectedRequested { modifier: false }
    )));
}

#[test]
fn test_escape_emits_cancel() {
    let events = collect_with_key_event(egui::Key::Escape, egui::Modifiers::default());

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::CancelRequested)));
}

#[test]
fn test_ctrl_z_emits_undo_and_ctrl_shift_z_redo() {
    let undo = collect_with_key_event(egui::Key::Z, egui::Modifiers::COMMAND);
    assert!(undo
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));

    let redo = collect_with_key_event(
        egui::Key::Z,
        egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
    );
    assert!(redo
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
    assert!(!redo
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
}

#[test]
fn test_num2_switches_to_control_tool() {
    let events = collect_with_key_event(egui::Key::Num2, egui::Modifiers::default());

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::SetToolRequested {
            tool: ToolMode::Control
        }
    )));
}
