//! Auto-Routine-Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AnchorEdit, AppCommand, AppController, AppIntent, AppState, EditorToolState, Interaction,
    ToolMode, UiState, ViewState,
};
pub use core::{
    AnchorPoint, AttributeKind, ControlPoint, ControlPointAttribute, ControlPointColor,
    FieldMapping, Routine, SelectedPoint, Spline, Viewport,
};
pub use shared::{EditorOptions, RenderScene};
