//! Core-Domänentypen: Geometrie, Spline, Steuerpunkte, Feld und Viewport.

pub mod anchor;
pub mod bezier;
pub mod control_point;
pub mod error;
pub mod field;
pub mod field_image;
pub mod routine;
pub mod selection;
/// Pfadmodell
///
/// Der Spline besteht aus einer geordneten Ankerliste:
/// - Segment `i` verbindet Anker `i` und `i + 1`
/// - Der globale Parameter `u` adressiert den ganzen Pfad
pub mod spline;
pub mod vector;
pub mod viewport;

pub use anchor::{AnchorPoint, HandleSide};
pub use bezier::CubicBezier;
pub use control_point::{
    AttributeKind, AttributeUpdate, ControlPoint, ControlPointAttribute, ControlPointColor,
    ControlPointList, ControlPointUpdate,
};
pub use error::{EditError, GeometryError};
pub use field::{FieldConfig, FieldMapping, ReferencePairs};
pub use field_image::FieldImage;
pub use routine::Routine;
pub use selection::SelectedPoint;
pub use spline::{Spline, SplineHit};
pub use viewport::Viewport;
