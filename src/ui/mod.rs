//! UI-Komponenten: Menü, Toolbar, Panels, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Jede Komponente liest den `AppState` nur und meldet Benutzeraktionen als
/// `AppIntent`s zurück. Tastatur-Shortcuts sind in eine eigene Datei extrahiert.
pub mod lists;
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use lists::render_point_lists;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
