//! Use-Case-Funktionen für Pfad- und Steuerpunkt-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `anchors`: Anker setzen, einfügen, löschen, bearbeiten
//! - `control_points`: Steuerpunkte setzen, bearbeiten, löschen
//! - `attributes`: Attribute eines Steuerpunkts
//!
//! Diskrete Mutationen legen vorher einen Undo-Snapshot an. `move_*` sind
//! Zieh-Schritte ohne eigenen Snapshot, das Ziehen committet beim Loslassen.

mod anchors;
mod attributes;
mod control_points;

pub use anchors::{
    add_anchor_at, delete_anchor_point, insert_anchor_on_curve, move_anchor_point,
    toggle_anchor_curve, update_anchor_point, MIN_ANCHORS,
};
pub use attributes::{add_attribute, remove_attribute, update_attribute};
pub use control_points::{
    add_control_point_at, delete_control_point, move_control_point, update_control_point,
};
