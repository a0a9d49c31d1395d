//! Fehlertypen der Geometrie- und Editier-Schicht.

use super::control_point::AttributeKind;
use thiserror::Error;

/// Fehler der reinen Geometrie-Funktionen (Vektor, Bézier, Koordinaten-Mapping).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Kurvenparameter außerhalb von [0, 1]; Aufrufer muss vorher clampen.
    #[error("Kurvenparameter t muss in [0, 1] liegen, erhalten: {t}")]
    ParameterOutOfRange { t: f32 },
    /// Division eines Vektors durch 0.
    #[error("Division durch 0")]
    DivideByZero,
    /// Referenzpunkte spannen auf mindestens einer Achse keine Strecke auf.
    #[error("Referenzpunkte sind auf einer Achse identisch, Mapping nicht bestimmbar")]
    DegenerateReference,
}

/// Fehler beim Bearbeiten von Steuerpunkten und Ankern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// Steuerpunkt besitzt bereits ein Attribut dieser Art.
    #[error("Steuerpunkt {point_id} besitzt bereits ein Attribut vom Typ {kind}")]
    DuplicateAttributeKind { point_id: u64, kind: AttributeKind },
    /// Geometriefehler während einer Mutation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
