//! Viewport-Input-Handling: Maus-Events, Scroll und Tastatur → AppIntent.
//!
//! Screen-Positionen werden relativ zur linken oberen Ecke der Zeichenfläche
//! weitergegeben.

use super::keyboard;
use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Default)]
pub struct InputState {
    /// Primärtaste wurde in der Zeichenfläche gedrückt und noch nicht losgelassen
    pointer_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_down: false,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Tastatur-Interaktionen in der Zeichenfläche.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        }];

        events.extend(keyboard::collect_keyboard_intents(ui));

        let to_local = |pos: egui::Pos2| Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
        let (modifiers, primary_pressed, primary_released, latest_pos, pointer_delta) =
            ui.input(|i| {
                (
                    i.modifiers,
                    i.pointer.primary_pressed(),
                    i.pointer.primary_released(),
                    i.pointer.latest_pos(),
                    i.pointer.delta(),
                )
            });

        if primary_pressed && response.hovered() {
            if let Some(pos) = latest_pos {
                self.pointer_down = true;
                events.push(AppIntent::PointerPressed {
                    screen_pos: to_local(pos),
                    modifier: modifiers.shift,
                });
            }
        }

        if pointer_delta != egui::Vec2::ZERO && (self.pointer_down || response.hovered()) {
            if let Some(pos) = latest_pos {
                events.push(AppIntent::PointerMoved {
                    screen_pos: to_local(pos),
                });
            }
        }

        if primary_released && self.pointer_down {
            self.pointer_down = false;
            events.push(AppIntent::PointerReleased);
        }

        self.handle_scroll_zoom(ui, response, &mut events);

        events
    }

    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.hovered() {
            return;
        }
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let rect = response.rect;
        let focal = response
            .hover_pos()
            .map(|pos| Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y));
        events.push(AppIntent::ZoomRequested {
            delta: scroll,
            focal,
        });
    }
}
