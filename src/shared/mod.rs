//! Geteilte Typen zwischen `app`, `render` und `ui`.
//!
//! `EditorOptions` wird von allen Layern gelesen, `RenderScene` ist die
//! einzige Sicht des Renderers auf den Editor-Zustand.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use render_scene::RenderScene;
