//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod field_image;
pub mod interaction;
pub mod options;
pub mod routine;
pub mod viewport;
