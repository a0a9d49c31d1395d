//! Routine-Datensatz an der Projektgrenze.
//!
//! Der Editor arbeitet nie direkt auf einer Routine: beim Laden werden Anker und
//! Steuerpunkte in den Arbeitszustand kopiert, beim Synchronisieren zurückgeschrieben.

use super::anchor::AnchorPoint;
use super::control_point::{ControlPoint, ControlPointAttribute, ControlPointColor};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Gespeicherte autonome Routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    /// Eindeutige ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Optionale Beschreibung
    #[serde(default)]
    pub description: Option<String>,
    /// Anker des Pfads
    pub anchor_points: Vec<AnchorPoint>,
    /// Steuerpunkte entlang des Pfads
    pub control_points: Vec<ControlPoint>,
    /// Erstellungszeitpunkt
    pub created: SystemTime,
    /// Zeitpunkt der letzten Änderung
    pub last_modified: SystemTime,
    /// Ungespeicherte Änderungen vorhanden
    #[serde(default)]
    pub is_dirty: bool,
}

impl Routine {
    /// Leere Routine mit aktuellem Zeitstempel.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = SystemTime::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            anchor_points: Vec::new(),
            control_points: Vec::new(),
            created: now,
            last_modified: now,
            is_dirty: true,
        }
    }

    /// Beispielroutine, mit der der Editor startet.
    pub fn demo() -> Self {
        let mut end = AnchorPoint::curved(Vec2::new(455.15, 317.15), 54.0).with_name("End");
        end.handles_aligned = false;

        Self {
            description: Some("Beispielpfad mit Drehung und Stopp".to_string()),
            anchor_points: vec![
                AnchorPoint::straight(Vec2::new(325.68, 241.64)).with_name("Start"),
                AnchorPoint::straight(Vec2::new(365.20, 241.64)),
                end,
            ],
            control_points: vec![
                ControlPoint::new(1, 0.3, ControlPointColor::Purple)
                    .with_attribute(ControlPointAttribute::Rotate { heading: 180.0 }),
                ControlPoint::new(2, 0.65, ControlPointColor::Red)
                    .with_attribute(ControlPointAttribute::Stop { duration: 1.5 }),
            ],
            is_dirty: false,
            ..Self::new("demo", "Demo")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_routine_ist_gueltig() {
        let routine = Routine::demo();
        assert_eq!(routine.anchor_points.len(), 3);
        assert_eq!(routine.anchor_points[0].name, "Start");
        assert!(routine.anchor_points[2].is_curved);
        assert!(!routine.anchor_points[2].handles_aligned);
        assert_eq!(routine.control_points.len(), 2);
        assert!(!routine.is_dirty);
    }

    #[test]
    fn test_neue_routine_ist_leer_und_dirty() {
        let routine = Routine::new("7", "Drei Teile");
        assert!(routine.anchor_points.is_empty());
        assert!(routine.control_points.is_empty());
        assert!(routine.is_dirty);
        assert_eq!(routine.created, routine.last_modified);
    }
}
