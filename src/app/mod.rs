//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
pub mod hit_test;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Editor-Sitzung (Pfad, View, Werkzeug).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AnchorEdit, AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, EditorToolState, Interaction, SelectionState, ToolMode, UiState, ViewState,
};
