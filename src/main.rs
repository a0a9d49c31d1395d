//! Auto-Routine-Studio.
//!
//! Editor für autonome Roboter-Routinen: Bézier-Pfade aus Ankern und
//! Handles, Steuerpunkte mit Verhaltens-Attributen auf dem Spielfeld.

use auto_routine_studio::{render, ui, AppController, AppIntent, AppState, EditorOptions, Routine};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Auto-Routine-Studio v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1440.0, 860.0])
                .with_title("Auto-Routine-Studio"),
            ..Default::default()
        };

        eframe::run_native(
            "Auto-Routine-Studio",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        let image_path = editor_options.field.image_path.clone();

        let mut app = Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        };

        let mut startup = vec![AppIntent::LoadRoutineRequested {
            routine: Box::new(Routine::demo()),
        }];
        if let Some(path) = image_path {
            startup.push(AppIntent::FieldImageSelected { path });
        }
        app.process_events(startup);

        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.sync_field_texture(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::render_point_lists(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(ui, &response));

                let scene = self.controller.build_render_scene(&self.state);
                self.renderer.render_scene(ui.painter(), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }

    fn sync_field_texture(&mut self, ctx: &egui::Context) {
        if !self.state.view.field_image_dirty {
            return;
        }
        self.state.view.field_image_dirty = false;

        if let Some(image) = self.state.view.field_image.as_deref() {
            self.renderer.set_field_image(ctx, image);
            log::info!("Feldbild als Textur hochgeladen");
        } else {
            self.renderer.clear_field_image();
            log::info!("Feldbild-Textur entfernt");
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
